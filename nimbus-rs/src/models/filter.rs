// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// Filter : A name/values pair used to scope a describe request.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Filter {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

impl Filter {
    /// A name/values pair used to scope a describe request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reset_name(&mut self) {
        self.name = None;
    }

    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = Some(values);
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = Some(values);
        self
    }

    /// Appends one value; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_value(mut self, value: String) -> Self {
        self.values.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    pub fn reset_values(&mut self) {
        self.values = None;
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Name", self.name.as_deref())?;
        w.list("Values", self.values.as_deref())?;
        w.finish()
    }
}

impl StableHash for Filter {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.name, &self.values])
    }
}

impl std::hash::Hash for Filter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
