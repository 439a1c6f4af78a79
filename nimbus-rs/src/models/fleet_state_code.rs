// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// FleetStateCode : The lifecycle states of a fleet.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FleetStateCode {
    Submitted,
    Active,
    Deleted,
    Failed,
    DeletedRunning,
    DeletedTerminating,
    Modifying,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl FleetStateCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Submitted => "submitted",
            Self::Active => "active",
            Self::Deleted => "deleted",
            Self::Failed => "failed",
            Self::DeletedRunning => "deleted_running",
            Self::DeletedTerminating => "deleted_terminating",
            Self::Modifying => "modifying",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "submitted", "active", "deleted", "failed",
            "deleted_running", "deleted_terminating", "modifying",
        ]
    }
}

impl fmt::Display for FleetStateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FleetStateCode {
    fn from(value: &str) -> Self {
        match value {
            "submitted" => Self::Submitted,
            "active" => Self::Active,
            "deleted" => Self::Deleted,
            "failed" => Self::Failed,
            "deleted_running" => Self::DeletedRunning,
            "deleted_terminating" => Self::DeletedTerminating,
            "modifying" => Self::Modifying,
            other => {
                log::trace!("unrecognized fleet state literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for FleetStateCode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<FleetStateCode> for String {
    fn from(value: FleetStateCode) -> Self {
        match value {
            FleetStateCode::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
