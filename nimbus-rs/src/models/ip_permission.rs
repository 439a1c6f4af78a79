// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{IpRange, Ipv6Range, UserIdGroupPair};

/// IpPermission : A set of permissions for a security group rule.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IpPermission {
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    from_port: Option<i32>,
    #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
    ip_protocol: Option<String>,
    #[serde(rename = "IpRanges", skip_serializing_if = "Option::is_none")]
    ip_ranges: Option<Vec<IpRange>>,
    #[serde(rename = "Ipv6Ranges", skip_serializing_if = "Option::is_none")]
    ipv6_ranges: Option<Vec<Ipv6Range>>,
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    to_port: Option<i32>,
    #[serde(rename = "UserIdGroupPairs", skip_serializing_if = "Option::is_none")]
    user_id_group_pairs: Option<Vec<UserIdGroupPair>>,
}

impl IpPermission {
    /// A set of permissions for a security group rule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from_port(&mut self, from_port: i32) {
        self.from_port = Some(from_port);
    }

    #[must_use]
    pub fn with_from_port(mut self, from_port: i32) -> Self {
        self.from_port = Some(from_port);
        self
    }

    pub fn from_port(&self) -> Option<i32> {
        self.from_port
    }

    pub fn reset_from_port(&mut self) {
        self.from_port = None;
    }

    pub fn set_ip_protocol(&mut self, ip_protocol: String) {
        self.ip_protocol = Some(ip_protocol);
    }

    #[must_use]
    pub fn with_ip_protocol(mut self, ip_protocol: String) -> Self {
        self.ip_protocol = Some(ip_protocol);
        self
    }

    pub fn ip_protocol(&self) -> Option<&str> {
        self.ip_protocol.as_deref()
    }

    pub fn reset_ip_protocol(&mut self) {
        self.ip_protocol = None;
    }

    pub fn set_ip_ranges(&mut self, ip_ranges: Vec<IpRange>) {
        self.ip_ranges = Some(ip_ranges);
    }

    #[must_use]
    pub fn with_ip_ranges(mut self, ip_ranges: Vec<IpRange>) -> Self {
        self.ip_ranges = Some(ip_ranges);
        self
    }

    /// Appends one ip range; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_ip_range(mut self, ip_range: IpRange) -> Self {
        self.ip_ranges.get_or_insert_with(Vec::new).push(ip_range);
        self
    }

    pub fn ip_ranges(&self) -> Option<&[IpRange]> {
        self.ip_ranges.as_deref()
    }

    pub fn reset_ip_ranges(&mut self) {
        self.ip_ranges = None;
    }

    pub fn set_ipv6_ranges(&mut self, ipv6_ranges: Vec<Ipv6Range>) {
        self.ipv6_ranges = Some(ipv6_ranges);
    }

    #[must_use]
    pub fn with_ipv6_ranges(mut self, ipv6_ranges: Vec<Ipv6Range>) -> Self {
        self.ipv6_ranges = Some(ipv6_ranges);
        self
    }

    /// Appends one ipv6 range; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_ipv6_range(mut self, ipv6_range: Ipv6Range) -> Self {
        self.ipv6_ranges.get_or_insert_with(Vec::new).push(ipv6_range);
        self
    }

    pub fn ipv6_ranges(&self) -> Option<&[Ipv6Range]> {
        self.ipv6_ranges.as_deref()
    }

    pub fn reset_ipv6_ranges(&mut self) {
        self.ipv6_ranges = None;
    }

    pub fn set_to_port(&mut self, to_port: i32) {
        self.to_port = Some(to_port);
    }

    #[must_use]
    pub fn with_to_port(mut self, to_port: i32) -> Self {
        self.to_port = Some(to_port);
        self
    }

    pub fn to_port(&self) -> Option<i32> {
        self.to_port
    }

    pub fn reset_to_port(&mut self) {
        self.to_port = None;
    }

    pub fn set_user_id_group_pairs(&mut self, user_id_group_pairs: Vec<UserIdGroupPair>) {
        self.user_id_group_pairs = Some(user_id_group_pairs);
    }

    #[must_use]
    pub fn with_user_id_group_pairs(mut self, user_id_group_pairs: Vec<UserIdGroupPair>) -> Self {
        self.user_id_group_pairs = Some(user_id_group_pairs);
        self
    }

    /// Appends one user id group pair; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_user_id_group_pair(mut self, user_id_group_pair: UserIdGroupPair) -> Self {
        self.user_id_group_pairs.get_or_insert_with(Vec::new).push(user_id_group_pair);
        self
    }

    pub fn user_id_group_pairs(&self) -> Option<&[UserIdGroupPair]> {
        self.user_id_group_pairs.as_deref()
    }

    pub fn reset_user_id_group_pairs(&mut self) {
        self.user_id_group_pairs = None;
    }
}

impl fmt::Display for IpPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("FromPort", self.from_port.as_ref())?;
        w.field("IpProtocol", self.ip_protocol.as_deref())?;
        w.list("IpRanges", self.ip_ranges.as_deref())?;
        w.list("Ipv6Ranges", self.ipv6_ranges.as_deref())?;
        w.field("ToPort", self.to_port.as_ref())?;
        w.list("UserIdGroupPairs", self.user_id_group_pairs.as_deref())?;
        w.finish()
    }
}

impl StableHash for IpPermission {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.from_port,
            &self.ip_protocol,
            &self.ip_ranges,
            &self.ipv6_ranges,
            &self.to_port,
            &self.user_id_group_pairs,
        ])
    }
}

impl std::hash::Hash for IpPermission {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
