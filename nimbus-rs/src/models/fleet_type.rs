// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// FleetType : The request modes a fleet can run in.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FleetType {
    Request,
    Maintain,
    Instant,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl FleetType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Request => "request",
            Self::Maintain => "maintain",
            Self::Instant => "instant",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "request", "maintain", "instant",
        ]
    }
}

impl fmt::Display for FleetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FleetType {
    fn from(value: &str) -> Self {
        match value {
            "request" => Self::Request,
            "maintain" => Self::Maintain,
            "instant" => Self::Instant,
            other => {
                log::trace!("unrecognized fleet type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for FleetType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<FleetType> for String {
    fn from(value: FleetType) -> Self {
        match value {
            FleetType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
