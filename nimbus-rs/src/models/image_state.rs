// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// ImageState : The lifecycle states of a machine image.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ImageState {
    Pending,
    Available,
    Invalid,
    Deregistered,
    Transient,
    Failed,
    Error,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl ImageState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Available => "available",
            Self::Invalid => "invalid",
            Self::Deregistered => "deregistered",
            Self::Transient => "transient",
            Self::Failed => "failed",
            Self::Error => "error",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "pending", "available", "invalid", "deregistered",
            "transient", "failed", "error",
        ]
    }
}

impl fmt::Display for ImageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ImageState {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "available" => Self::Available,
            "invalid" => Self::Invalid,
            "deregistered" => Self::Deregistered,
            "transient" => Self::Transient,
            "failed" => Self::Failed,
            "error" => Self::Error,
            other => {
                log::trace!("unrecognized image state literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for ImageState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ImageState> for String {
    fn from(value: ImageState) -> Self {
        match value {
            ImageState::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
