// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// NatGatewayState : The lifecycle states of a NAT gateway.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NatGatewayState {
    Pending,
    Failed,
    Available,
    Deleting,
    Deleted,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl NatGatewayState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Available => "available",
            Self::Deleting => "deleting",
            Self::Deleted => "deleted",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "pending", "failed", "available", "deleting",
            "deleted",
        ]
    }
}

impl fmt::Display for NatGatewayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NatGatewayState {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "failed" => Self::Failed,
            "available" => Self::Available,
            "deleting" => Self::Deleting,
            "deleted" => Self::Deleted,
            other => {
                log::trace!("unrecognized NAT gateway state literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for NatGatewayState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<NatGatewayState> for String {
    fn from(value: NatGatewayState) -> Self {
        match value {
            NatGatewayState::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
