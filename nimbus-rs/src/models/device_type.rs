// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// DeviceType : The root device kinds for images and instances.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeviceType {
    Ebs,
    InstanceStore,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl DeviceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ebs => "ebs",
            Self::InstanceStore => "instance-store",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "ebs", "instance-store",
        ]
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DeviceType {
    fn from(value: &str) -> Self {
        match value {
            "ebs" => Self::Ebs,
            "instance-store" => Self::InstanceStore,
            other => {
                log::trace!("unrecognized device type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for DeviceType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<DeviceType> for String {
    fn from(value: DeviceType) -> Self {
        match value {
            DeviceType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
