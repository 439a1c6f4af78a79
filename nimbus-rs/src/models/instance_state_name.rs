// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// InstanceStateName : The lifecycle state names an instance reports.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum InstanceStateName {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl InstanceStateName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Terminated => "terminated",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "pending", "running", "shutting-down", "terminated",
            "stopping", "stopped",
        ]
    }
}

impl fmt::Display for InstanceStateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InstanceStateName {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "shutting-down" => Self::ShuttingDown,
            "terminated" => Self::Terminated,
            "stopping" => Self::Stopping,
            "stopped" => Self::Stopped,
            other => {
                log::trace!("unrecognized instance state name literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for InstanceStateName {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<InstanceStateName> for String {
    fn from(value: InstanceStateName) -> Self {
        match value {
            InstanceStateName::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::InstanceStateName;

    #[test]
    fn known_literals_round_trip() {
        for literal in InstanceStateName::values() {
            let parsed = InstanceStateName::from(*literal);
            assert!(!matches!(parsed, InstanceStateName::Other(_)));
            assert_eq!(*literal, parsed.as_str());
        }
    }

    #[test_case("rebooting")]
    #[test_case("")]
    fn unknown_literals_survive_as_other(literal: &str) {
        let parsed = InstanceStateName::from(literal);
        assert_eq!(InstanceStateName::Other(literal.to_owned()), parsed);
        assert_eq!(literal, String::from(parsed));
    }

    #[test]
    fn display_matches_the_wire_literal() {
        assert_eq!("shutting-down", InstanceStateName::ShuttingDown.to_string());
    }
}
