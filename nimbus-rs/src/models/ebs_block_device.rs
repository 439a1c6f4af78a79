// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// EbsBlockDevice : Describes a block device for a volume.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EbsBlockDevice {
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    delete_on_termination: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    iops: Option<i32>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<String>,
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    volume_size: Option<i32>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    volume_type: Option<String>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    encrypted: Option<bool>,
}

impl EbsBlockDevice {
    /// Describes a block device for a volume.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_delete_on_termination(&mut self, delete_on_termination: bool) {
        self.delete_on_termination = Some(delete_on_termination);
    }

    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: bool) -> Self {
        self.delete_on_termination = Some(delete_on_termination);
        self
    }

    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    pub fn reset_delete_on_termination(&mut self) {
        self.delete_on_termination = None;
    }

    pub fn set_iops(&mut self, iops: i32) {
        self.iops = Some(iops);
    }

    #[must_use]
    pub fn with_iops(mut self, iops: i32) -> Self {
        self.iops = Some(iops);
        self
    }

    pub fn iops(&self) -> Option<i32> {
        self.iops
    }

    pub fn reset_iops(&mut self) {
        self.iops = None;
    }

    pub fn set_snapshot_id(&mut self, snapshot_id: String) {
        self.snapshot_id = Some(snapshot_id);
    }

    #[must_use]
    pub fn with_snapshot_id(mut self, snapshot_id: String) -> Self {
        self.snapshot_id = Some(snapshot_id);
        self
    }

    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    pub fn reset_snapshot_id(&mut self) {
        self.snapshot_id = None;
    }

    pub fn set_volume_size(&mut self, volume_size: i32) {
        self.volume_size = Some(volume_size);
    }

    #[must_use]
    pub fn with_volume_size(mut self, volume_size: i32) -> Self {
        self.volume_size = Some(volume_size);
        self
    }

    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    pub fn reset_volume_size(&mut self) {
        self.volume_size = None;
    }

    /// Accepts the literal string or a typed
    /// [`VolumeType`](crate::models::VolumeType) value.
    pub fn set_volume_type(&mut self, volume_type: impl Into<String>) {
        self.volume_type = Some(volume_type.into());
    }

    #[must_use]
    pub fn with_volume_type(mut self, volume_type: impl Into<String>) -> Self {
        self.volume_type = Some(volume_type.into());
        self
    }

    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }

    pub fn reset_volume_type(&mut self) {
        self.volume_type = None;
    }

    pub fn set_kms_key_id(&mut self, kms_key_id: String) {
        self.kms_key_id = Some(kms_key_id);
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: String) -> Self {
        self.kms_key_id = Some(kms_key_id);
        self
    }

    pub fn kms_key_id(&self) -> Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn reset_kms_key_id(&mut self) {
        self.kms_key_id = None;
    }

    pub fn set_encrypted(&mut self, encrypted: bool) {
        self.encrypted = Some(encrypted);
    }

    #[must_use]
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub fn encrypted(&self) -> Option<bool> {
        self.encrypted
    }

    pub fn reset_encrypted(&mut self) {
        self.encrypted = None;
    }
}

impl fmt::Display for EbsBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DeleteOnTermination", self.delete_on_termination.as_ref())?;
        w.field("Iops", self.iops.as_ref())?;
        w.field("SnapshotId", self.snapshot_id.as_deref())?;
        w.field("VolumeSize", self.volume_size.as_ref())?;
        w.field("VolumeType", self.volume_type.as_deref())?;
        w.field("KmsKeyId", self.kms_key_id.as_deref())?;
        w.field("Encrypted", self.encrypted.as_ref())?;
        w.finish()
    }
}

impl StableHash for EbsBlockDevice {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.delete_on_termination,
            &self.iops,
            &self.snapshot_id,
            &self.volume_size,
            &self.volume_type,
            &self.kms_key_id,
            &self.encrypted,
        ])
    }
}

impl std::hash::Hash for EbsBlockDevice {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
