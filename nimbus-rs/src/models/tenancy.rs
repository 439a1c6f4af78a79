// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// Tenancy : How an instance is placed on shared or dedicated hardware.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Tenancy {
    Default,
    Dedicated,
    Host,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl Tenancy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Dedicated => "dedicated",
            Self::Host => "host",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "default", "dedicated", "host",
        ]
    }
}

impl fmt::Display for Tenancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Tenancy {
    fn from(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "dedicated" => Self::Dedicated,
            "host" => Self::Host,
            other => {
                log::trace!("unrecognized tenancy literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for Tenancy {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Tenancy> for String {
    fn from(value: Tenancy) -> Self {
        match value {
            Tenancy::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
