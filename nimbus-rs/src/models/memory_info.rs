// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// MemoryInfo : Describes the memory of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MemoryInfo {
    #[serde(rename = "SizeInMiB", skip_serializing_if = "Option::is_none")]
    size_in_mib: Option<i64>,
}

impl MemoryInfo {
    /// Describes the memory of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size_in_mib(&mut self, size_in_mib: i64) {
        self.size_in_mib = Some(size_in_mib);
    }

    #[must_use]
    pub fn with_size_in_mib(mut self, size_in_mib: i64) -> Self {
        self.size_in_mib = Some(size_in_mib);
        self
    }

    pub fn size_in_mib(&self) -> Option<i64> {
        self.size_in_mib
    }

    pub fn reset_size_in_mib(&mut self) {
        self.size_in_mib = None;
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("SizeInMiB", self.size_in_mib.as_ref())?;
        w.finish()
    }
}

impl StableHash for MemoryInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.size_in_mib])
    }
}

impl std::hash::Hash for MemoryInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
