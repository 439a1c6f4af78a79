// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// InstanceState : Describes the current state of an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InstanceState {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl InstanceState {
    /// Describes the current state of an instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(&mut self, code: i32) {
        self.code = Some(code);
    }

    #[must_use]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn reset_code(&mut self) {
        self.code = None;
    }

    /// Accepts the literal string or a typed
    /// [`InstanceStateName`](crate::models::InstanceStateName) value.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reset_name(&mut self) {
        self.name = None;
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Code", self.code.as_ref())?;
        w.field("Name", self.name.as_deref())?;
        w.finish()
    }
}

impl StableHash for InstanceState {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.code, &self.name])
    }
}

impl std::hash::Hash for InstanceState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
