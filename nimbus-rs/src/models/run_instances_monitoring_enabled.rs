// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// RunInstancesMonitoringEnabled : Whether detailed monitoring is enabled when launching instances.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RunInstancesMonitoringEnabled {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

impl RunInstancesMonitoringEnabled {
    /// Whether detailed monitoring is enabled when launching instances.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = Some(enabled);
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn reset_enabled(&mut self) {
        self.enabled = None;
    }
}

impl fmt::Display for RunInstancesMonitoringEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Enabled", self.enabled.as_ref())?;
        w.finish()
    }
}

impl StableHash for RunInstancesMonitoringEnabled {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.enabled])
    }
}

impl std::hash::Hash for RunInstancesMonitoringEnabled {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
