// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// EbsInstanceBlockDevice : Describes a volume attached to an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EbsInstanceBlockDevice {
    #[serde(rename = "AttachTime", skip_serializing_if = "Option::is_none")]
    attach_time: Option<DateTime<Utc>>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    delete_on_termination: Option<bool>,
    /// Valid values: `attaching | attached | detaching | detached`.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    volume_id: Option<String>,
}

impl EbsInstanceBlockDevice {
    /// Describes a volume attached to an instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attach_time(&mut self, attach_time: DateTime<Utc>) {
        self.attach_time = Some(attach_time);
    }

    #[must_use]
    pub fn with_attach_time(mut self, attach_time: DateTime<Utc>) -> Self {
        self.attach_time = Some(attach_time);
        self
    }

    pub fn attach_time(&self) -> Option<&DateTime<Utc>> {
        self.attach_time.as_ref()
    }

    pub fn reset_attach_time(&mut self) {
        self.attach_time = None;
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

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    #[must_use]
    pub fn with_status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn reset_status(&mut self) {
        self.status = None;
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
}

impl fmt::Display for EbsInstanceBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AttachTime", self.attach_time.as_ref())?;
        w.field("DeleteOnTermination", self.delete_on_termination.as_ref())?;
        w.field("Status", self.status.as_deref())?;
        w.field("VolumeId", self.volume_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for EbsInstanceBlockDevice {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.attach_time,
            &self.delete_on_termination,
            &self.status,
            &self.volume_id,
        ])
    }
}

impl std::hash::Hash for EbsInstanceBlockDevice {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
