// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::EbsInstanceBlockDevice;

/// InstanceBlockDeviceMapping : Describes a block device mapping entry of an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InstanceBlockDeviceMapping {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    ebs: Option<EbsInstanceBlockDevice>,
}

impl InstanceBlockDeviceMapping {
    /// Describes a block device mapping entry of an instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_device_name(&mut self, device_name: String) {
        self.device_name = Some(device_name);
    }

    #[must_use]
    pub fn with_device_name(mut self, device_name: String) -> Self {
        self.device_name = Some(device_name);
        self
    }

    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    pub fn reset_device_name(&mut self) {
        self.device_name = None;
    }

    pub fn set_ebs(&mut self, ebs: EbsInstanceBlockDevice) {
        self.ebs = Some(ebs);
    }

    #[must_use]
    pub fn with_ebs(mut self, ebs: EbsInstanceBlockDevice) -> Self {
        self.ebs = Some(ebs);
        self
    }

    pub fn ebs(&self) -> Option<&EbsInstanceBlockDevice> {
        self.ebs.as_ref()
    }

    pub fn reset_ebs(&mut self) {
        self.ebs = None;
    }
}

impl fmt::Display for InstanceBlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DeviceName", self.device_name.as_deref())?;
        w.field("Ebs", self.ebs.as_ref())?;
        w.finish()
    }
}

impl StableHash for InstanceBlockDeviceMapping {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.device_name, &self.ebs])
    }
}

impl std::hash::Hash for InstanceBlockDeviceMapping {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
