// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// IpRange : Describes an IPv4 range.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IpRange {
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    cidr_ip: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl IpRange {
    /// Describes an IPv4 range.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cidr_ip(&mut self, cidr_ip: String) {
        self.cidr_ip = Some(cidr_ip);
    }

    #[must_use]
    pub fn with_cidr_ip(mut self, cidr_ip: String) -> Self {
        self.cidr_ip = Some(cidr_ip);
        self
    }

    pub fn cidr_ip(&self) -> Option<&str> {
        self.cidr_ip.as_deref()
    }

    pub fn reset_cidr_ip(&mut self) {
        self.cidr_ip = None;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn reset_description(&mut self) {
        self.description = None;
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("CidrIp", self.cidr_ip.as_deref())?;
        w.field("Description", self.description.as_deref())?;
        w.finish()
    }
}

impl StableHash for IpRange {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.cidr_ip, &self.description])
    }
}

impl std::hash::Hash for IpRange {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
