// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// MonitoringState : The detailed-monitoring states of an instance.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum MonitoringState {
    Disabled,
    Disabling,
    Enabled,
    Pending,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl MonitoringState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Disabled => "disabled",
            Self::Disabling => "disabling",
            Self::Enabled => "enabled",
            Self::Pending => "pending",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "disabled", "disabling", "enabled", "pending",
        ]
    }
}

impl fmt::Display for MonitoringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MonitoringState {
    fn from(value: &str) -> Self {
        match value {
            "disabled" => Self::Disabled,
            "disabling" => Self::Disabling,
            "enabled" => Self::Enabled,
            "pending" => Self::Pending,
            other => {
                log::trace!("unrecognized monitoring state literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for MonitoringState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<MonitoringState> for String {
    fn from(value: MonitoringState) -> Self {
        match value {
            MonitoringState::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
