// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// PlatformValues : The platform marker on images and instances; the service only sets `windows`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PlatformValues {
    Windows,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl PlatformValues {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "windows",
        ]
    }
}

impl fmt::Display for PlatformValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlatformValues {
    fn from(value: &str) -> Self {
        match value {
            "windows" => Self::Windows,
            other => {
                log::trace!("unrecognized platform literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for PlatformValues {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PlatformValues> for String {
    fn from(value: PlatformValues) -> Self {
        match value {
            PlatformValues::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
