// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Tag;

/// Snapshot : Describes a volume snapshot.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(rename = "DataEncryptionKeyId", skip_serializing_if = "Option::is_none")]
    data_encryption_key_id: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    encrypted: Option<bool>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "Progress", skip_serializing_if = "Option::is_none")]
    progress: Option<String>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    snapshot_id: Option<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "StateMessage", skip_serializing_if = "Option::is_none")]
    state_message: Option<String>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    volume_id: Option<String>,
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    volume_size: Option<i32>,
    #[serde(rename = "OwnerAlias", skip_serializing_if = "Option::is_none")]
    owner_alias: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl Snapshot {
    /// Describes a volume snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data_encryption_key_id(&mut self, data_encryption_key_id: String) {
        self.data_encryption_key_id = Some(data_encryption_key_id);
    }

    #[must_use]
    pub fn with_data_encryption_key_id(mut self, data_encryption_key_id: String) -> Self {
        self.data_encryption_key_id = Some(data_encryption_key_id);
        self
    }

    pub fn data_encryption_key_id(&self) -> Option<&str> {
        self.data_encryption_key_id.as_deref()
    }

    pub fn reset_data_encryption_key_id(&mut self) {
        self.data_encryption_key_id = None;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn reset_description(&mut self) {
        self.description = None;
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

    pub fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = Some(owner_id);
    }

    #[must_use]
    pub fn with_owner_id(mut self, owner_id: String) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn reset_owner_id(&mut self) {
        self.owner_id = None;
    }

    pub fn set_progress(&mut self, progress: String) {
        self.progress = Some(progress);
    }

    #[must_use]
    pub fn with_progress(mut self, progress: String) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn progress(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    pub fn reset_progress(&mut self) {
        self.progress = None;
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

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.start_time = Some(start_time);
    }

    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn start_time(&self) -> Option<&DateTime<Utc>> {
        self.start_time.as_ref()
    }

    pub fn reset_start_time(&mut self) {
        self.start_time = None;
    }

    /// Accepts the literal string or a typed
    /// [`SnapshotState`](crate::models::SnapshotState) value.
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

    pub fn set_state_message(&mut self, state_message: String) {
        self.state_message = Some(state_message);
    }

    #[must_use]
    pub fn with_state_message(mut self, state_message: String) -> Self {
        self.state_message = Some(state_message);
        self
    }

    pub fn state_message(&self) -> Option<&str> {
        self.state_message.as_deref()
    }

    pub fn reset_state_message(&mut self) {
        self.state_message = None;
    }

    pub fn set_volume_id(&mut self, volume_id: String) {
        self.volume_id = Some(volume_id);
    }

    #[must_use]
    pub fn with_volume_id(mut self, volume_id: String) -> Self {
        self.volume_id = Some(volume_id);
        self
    }

    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    pub fn reset_volume_id(&mut self) {
        self.volume_id = None;
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

    pub fn set_owner_alias(&mut self, owner_alias: String) {
        self.owner_alias = Some(owner_alias);
    }

    #[must_use]
    pub fn with_owner_alias(mut self, owner_alias: String) -> Self {
        self.owner_alias = Some(owner_alias);
        self
    }

    pub fn owner_alias(&self) -> Option<&str> {
        self.owner_alias.as_deref()
    }

    pub fn reset_owner_alias(&mut self) {
        self.owner_alias = None;
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = Some(tags);
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Appends one tag; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn reset_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DataEncryptionKeyId", self.data_encryption_key_id.as_deref())?;
        w.field("Description", self.description.as_deref())?;
        w.field("Encrypted", self.encrypted.as_ref())?;
        w.field("KmsKeyId", self.kms_key_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("Progress", self.progress.as_deref())?;
        w.field("SnapshotId", self.snapshot_id.as_deref())?;
        w.field("StartTime", self.start_time.as_ref())?;
        w.field("State", self.state.as_deref())?;
        w.field("StateMessage", self.state_message.as_deref())?;
        w.field("VolumeId", self.volume_id.as_deref())?;
        w.field("VolumeSize", self.volume_size.as_ref())?;
        w.field("OwnerAlias", self.owner_alias.as_deref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for Snapshot {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.data_encryption_key_id,
            &self.description,
            &self.encrypted,
            &self.kms_key_id,
            &self.owner_id,
            &self.progress,
            &self.snapshot_id,
            &self.start_time,
            &self.state,
            &self.state_message,
            &self.volume_id,
            &self.volume_size,
            &self.owner_alias,
            &self.tags,
        ])
    }
}

impl std::hash::Hash for Snapshot {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
