// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// VolumeType : The volume kinds a block device can be backed by.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum VolumeType {
    Standard,
    Io1,
    Io2,
    Gp2,
    Sc1,
    St1,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl VolumeType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Io1 => "io1",
            Self::Io2 => "io2",
            Self::Gp2 => "gp2",
            Self::Sc1 => "sc1",
            Self::St1 => "st1",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "standard", "io1", "io2", "gp2",
            "sc1", "st1",
        ]
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VolumeType {
    fn from(value: &str) -> Self {
        match value {
            "standard" => Self::Standard,
            "io1" => Self::Io1,
            "io2" => Self::Io2,
            "gp2" => Self::Gp2,
            "sc1" => Self::Sc1,
            "st1" => Self::St1,
            other => {
                log::trace!("unrecognized volume type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for VolumeType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<VolumeType> for String {
    fn from(value: VolumeType) -> Self {
        match value {
            VolumeType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
