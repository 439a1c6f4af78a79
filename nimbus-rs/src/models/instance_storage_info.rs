// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::DiskInfo;

/// InstanceStorageInfo : Describes the instance-store storage of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InstanceStorageInfo {
    #[serde(rename = "TotalSizeInGB", skip_serializing_if = "Option::is_none")]
    total_size_in_gb: Option<i64>,
    #[serde(rename = "Disks", skip_serializing_if = "Option::is_none")]
    disks: Option<Vec<DiskInfo>>,
}

impl InstanceStorageInfo {
    /// Describes the instance-store storage of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total_size_in_gb(&mut self, total_size_in_gb: i64) {
        self.total_size_in_gb = Some(total_size_in_gb);
    }

    #[must_use]
    pub fn with_total_size_in_gb(mut self, total_size_in_gb: i64) -> Self {
        self.total_size_in_gb = Some(total_size_in_gb);
        self
    }

    pub fn total_size_in_gb(&self) -> Option<i64> {
        self.total_size_in_gb
    }

    pub fn reset_total_size_in_gb(&mut self) {
        self.total_size_in_gb = None;
    }

    pub fn set_disks(&mut self, disks: Vec<DiskInfo>) {
        self.disks = Some(disks);
    }

    #[must_use]
    pub fn with_disks(mut self, disks: Vec<DiskInfo>) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Appends one disk; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_disk(mut self, disk: DiskInfo) -> Self {
        self.disks.get_or_insert_with(Vec::new).push(disk);
        self
    }

    pub fn disks(&self) -> Option<&[DiskInfo]> {
        self.disks.as_deref()
    }

    pub fn reset_disks(&mut self) {
        self.disks = None;
    }
}

impl fmt::Display for InstanceStorageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("TotalSizeInGB", self.total_size_in_gb.as_ref())?;
        w.list("Disks", self.disks.as_deref())?;
        w.finish()
    }
}

impl StableHash for InstanceStorageInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.total_size_in_gb, &self.disks])
    }
}

impl std::hash::Hash for InstanceStorageInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
