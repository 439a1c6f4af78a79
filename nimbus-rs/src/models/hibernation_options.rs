// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// HibernationOptions : Indicates whether an instance is enabled for hibernation.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HibernationOptions {
    #[serde(rename = "Configured", skip_serializing_if = "Option::is_none")]
    configured: Option<bool>,
}

impl HibernationOptions {
    /// Indicates whether an instance is enabled for hibernation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_configured(&mut self, configured: bool) {
        self.configured = Some(configured);
    }

    #[must_use]
    pub fn with_configured(mut self, configured: bool) -> Self {
        self.configured = Some(configured);
        self
    }

    pub fn configured(&self) -> Option<bool> {
        self.configured
    }

    pub fn reset_configured(&mut self) {
        self.configured = None;
    }
}

impl fmt::Display for HibernationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Configured", self.configured.as_ref())?;
        w.finish()
    }
}

impl StableHash for HibernationOptions {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.configured])
    }
}

impl std::hash::Hash for HibernationOptions {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
