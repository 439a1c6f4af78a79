// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// DiskInfo : Describes an instance-store disk of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DiskInfo {
    #[serde(rename = "SizeInGB", skip_serializing_if = "Option::is_none")]
    size_in_gb: Option<i64>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    count: Option<i32>,
    /// Valid values: `hdd | ssd`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    disk_type: Option<String>,
}

impl DiskInfo {
    /// Describes an instance-store disk of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size_in_gb(&mut self, size_in_gb: i64) {
        self.size_in_gb = Some(size_in_gb);
    }

    #[must_use]
    pub fn with_size_in_gb(mut self, size_in_gb: i64) -> Self {
        self.size_in_gb = Some(size_in_gb);
        self
    }

    pub fn size_in_gb(&self) -> Option<i64> {
        self.size_in_gb
    }

    pub fn reset_size_in_gb(&mut self) {
        self.size_in_gb = None;
    }

    pub fn set_count(&mut self, count: i32) {
        self.count = Some(count);
    }

    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn count(&self) -> Option<i32> {
        self.count
    }

    pub fn reset_count(&mut self) {
        self.count = None;
    }

    pub fn set_disk_type(&mut self, disk_type: String) {
        self.disk_type = Some(disk_type);
    }

    #[must_use]
    pub fn with_disk_type(mut self, disk_type: String) -> Self {
        self.disk_type = Some(disk_type);
        self
    }

    pub fn disk_type(&self) -> Option<&str> {
        self.disk_type.as_deref()
    }

    pub fn reset_disk_type(&mut self) {
        self.disk_type = None;
    }
}

impl fmt::Display for DiskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("SizeInGB", self.size_in_gb.as_ref())?;
        w.field("Count", self.count.as_ref())?;
        w.field("Type", self.disk_type.as_deref())?;
        w.finish()
    }
}

impl StableHash for DiskInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.size_in_gb, &self.count, &self.disk_type])
    }
}

impl std::hash::Hash for DiskInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
