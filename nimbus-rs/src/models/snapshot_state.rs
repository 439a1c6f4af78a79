// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// SnapshotState : The lifecycle states of a volume snapshot.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SnapshotState {
    Pending,
    Completed,
    Error,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl SnapshotState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "pending", "completed", "error",
        ]
    }
}

impl fmt::Display for SnapshotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SnapshotState {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "error" => Self::Error,
            other => {
                log::trace!("unrecognized snapshot state literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for SnapshotState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SnapshotState> for String {
    fn from(value: SnapshotState) -> Self {
        match value {
            SnapshotState::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
