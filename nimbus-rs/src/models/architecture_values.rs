// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// ArchitectureValues : The processor architectures the service publishes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ArchitectureValues {
    I386,
    X8664,
    Arm64,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl ArchitectureValues {
    pub fn as_str(&self) -> &str {
        match self {
            Self::I386 => "i386",
            Self::X8664 => "x86_64",
            Self::Arm64 => "arm64",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "i386", "x86_64", "arm64",
        ]
    }
}

impl fmt::Display for ArchitectureValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ArchitectureValues {
    fn from(value: &str) -> Self {
        match value {
            "i386" => Self::I386,
            "x86_64" => Self::X8664,
            "arm64" => Self::Arm64,
            other => {
                log::trace!("unrecognized architecture literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for ArchitectureValues {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ArchitectureValues> for String {
    fn from(value: ArchitectureValues) -> Self {
        match value {
            ArchitectureValues::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
