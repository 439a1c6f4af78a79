// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// Ipv6Range : Describes an IPv6 range.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ipv6Range {
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    cidr_ipv6: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Ipv6Range {
    /// Describes an IPv6 range.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cidr_ipv6(&mut self, cidr_ipv6: String) {
        self.cidr_ipv6 = Some(cidr_ipv6);
    }

    #[must_use]
    pub fn with_cidr_ipv6(mut self, cidr_ipv6: String) -> Self {
        self.cidr_ipv6 = Some(cidr_ipv6);
        self
    }

    pub fn cidr_ipv6(&self) -> Option<&str> {
        self.cidr_ipv6.as_deref()
    }

    pub fn reset_cidr_ipv6(&mut self) {
        self.cidr_ipv6 = None;
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

impl fmt::Display for Ipv6Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("CidrIpv6", self.cidr_ipv6.as_deref())?;
        w.field("Description", self.description.as_deref())?;
        w.finish()
    }
}

impl StableHash for Ipv6Range {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.cidr_ipv6, &self.description])
    }
}

impl std::hash::Hash for Ipv6Range {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
