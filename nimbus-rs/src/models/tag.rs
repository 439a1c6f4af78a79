// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// Tag : A key/value pair assigned to a compute resource.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Tag {
    /// A key/value pair assigned to a compute resource.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: String) {
        self.key = Some(key);
    }

    #[must_use]
    pub fn with_key(mut self, key: String) -> Self {
        self.key = Some(key);
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn reset_key(&mut self) {
        self.key = None;
    }

    pub fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }

    #[must_use]
    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn reset_value(&mut self) {
        self.value = None;
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Key", self.key.as_deref())?;
        w.field("Value", self.value.as_deref())?;
        w.finish()
    }
}

impl StableHash for Tag {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.key, &self.value])
    }
}

impl std::hash::Hash for Tag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
