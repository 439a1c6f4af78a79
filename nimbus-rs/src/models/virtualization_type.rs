// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// VirtualizationType : The virtualization modes an image can require.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum VirtualizationType {
    Hvm,
    Paravirtual,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl VirtualizationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hvm => "hvm",
            Self::Paravirtual => "paravirtual",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "hvm", "paravirtual",
        ]
    }
}

impl fmt::Display for VirtualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VirtualizationType {
    fn from(value: &str) -> Self {
        match value {
            "hvm" => Self::Hvm,
            "paravirtual" => Self::Paravirtual,
            other => {
                log::trace!("unrecognized virtualization type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for VirtualizationType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<VirtualizationType> for String {
    fn from(value: VirtualizationType) -> Self {
        match value {
            VirtualizationType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
