// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::EbsBlockDevice;

/// BlockDeviceMapping : Describes a block device mapping.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BlockDeviceMapping {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    #[serde(rename = "VirtualName", skip_serializing_if = "Option::is_none")]
    virtual_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    ebs: Option<EbsBlockDevice>,
    #[serde(rename = "NoDevice", skip_serializing_if = "Option::is_none")]
    no_device: Option<String>,
}

impl BlockDeviceMapping {
    /// Describes a block device mapping.
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

    pub fn set_virtual_name(&mut self, virtual_name: String) {
        self.virtual_name = Some(virtual_name);
    }

    #[must_use]
    pub fn with_virtual_name(mut self, virtual_name: String) -> Self {
        self.virtual_name = Some(virtual_name);
        self
    }

    pub fn virtual_name(&self) -> Option<&str> {
        self.virtual_name.as_deref()
    }

    pub fn reset_virtual_name(&mut self) {
        self.virtual_name = None;
    }

    pub fn set_ebs(&mut self, ebs: EbsBlockDevice) {
        self.ebs = Some(ebs);
    }

    #[must_use]
    pub fn with_ebs(mut self, ebs: EbsBlockDevice) -> Self {
        self.ebs = Some(ebs);
        self
    }

    pub fn ebs(&self) -> Option<&EbsBlockDevice> {
        self.ebs.as_ref()
    }

    pub fn reset_ebs(&mut self) {
        self.ebs = None;
    }

    pub fn set_no_device(&mut self, no_device: String) {
        self.no_device = Some(no_device);
    }

    #[must_use]
    pub fn with_no_device(mut self, no_device: String) -> Self {
        self.no_device = Some(no_device);
        self
    }

    pub fn no_device(&self) -> Option<&str> {
        self.no_device.as_deref()
    }

    pub fn reset_no_device(&mut self) {
        self.no_device = None;
    }
}

impl fmt::Display for BlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DeviceName", self.device_name.as_deref())?;
        w.field("VirtualName", self.virtual_name.as_deref())?;
        w.field("Ebs", self.ebs.as_ref())?;
        w.field("NoDevice", self.no_device.as_deref())?;
        w.finish()
    }
}

impl StableHash for BlockDeviceMapping {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.device_name, &self.virtual_name, &self.ebs, &self.no_device])
    }
}

impl std::hash::Hash for BlockDeviceMapping {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
