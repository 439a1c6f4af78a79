// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// Monitoring : Describes the monitoring of an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Monitoring {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl Monitoring {
    /// Describes the monitoring of an instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the literal string or a typed
    /// [`MonitoringState`](crate::models::MonitoringState) value.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn reset_state(&mut self) {
        self.state = None;
    }
}

impl fmt::Display for Monitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("State", self.state.as_deref())?;
        w.finish()
    }
}

impl StableHash for Monitoring {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.state])
    }
}

impl std::hash::Hash for Monitoring {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
