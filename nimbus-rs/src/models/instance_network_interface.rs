// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::GroupIdentifier;

/// InstanceNetworkInterface : Describes a network interface attached to an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InstanceNetworkInterface {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "MacAddress", skip_serializing_if = "Option::is_none")]
    mac_address: Option<String>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    network_interface_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    private_ip_address: Option<String>,
    #[serde(rename = "SourceDestCheck", skip_serializing_if = "Option::is_none")]
    source_dest_check: Option<bool>,
    /// Valid values: `available | associated | attaching | in-use | detaching`.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
}

impl InstanceNetworkInterface {
    /// Describes a network interface attached to an instance.
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_groups(&mut self, groups: Vec<GroupIdentifier>) {
        self.groups = Some(groups);
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<GroupIdentifier>) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Appends one group; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_group(mut self, group: GroupIdentifier) -> Self {
        self.groups.get_or_insert_with(Vec::new).push(group);
        self
    }

    pub fn groups(&self) -> Option<&[GroupIdentifier]> {
        self.groups.as_deref()
    }

    pub fn reset_groups(&mut self) {
        self.groups = None;
    }

    pub fn set_mac_address(&mut self, mac_address: String) {
        self.mac_address = Some(mac_address);
    }

    #[must_use]
    pub fn with_mac_address(mut self, mac_address: String) -> Self {
        self.mac_address = Some(mac_address);
        self
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    pub fn reset_mac_address(&mut self) {
        self.mac_address = None;
    }

    pub fn set_network_interface_id(&mut self, network_interface_id: String) {
        self.network_interface_id = Some(network_interface_id);
    }

    #[must_use]
    pub fn with_network_interface_id(mut self, network_interface_id: String) -> Self {
        self.network_interface_id = Some(network_interface_id);
        self
    }

    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }

    pub fn reset_network_interface_id(&mut self) {
        self.network_interface_id = None;
    }

    pub fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = Some(owner_id);
    }

    #[must_use]
    pub fn with_owner_id(mut self, owner_id: String) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn reset_owner_id(&mut self) {
        self.owner_id = None;
    }

    pub fn set_private_dns_name(&mut self, private_dns_name: String) {
        self.private_dns_name = Some(private_dns_name);
    }

    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: String) -> Self {
        self.private_dns_name = Some(private_dns_name);
        self
    }

    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    pub fn reset_private_dns_name(&mut self) {
        self.private_dns_name = None;
    }

    pub fn set_private_ip_address(&mut self, private_ip_address: String) {
        self.private_ip_address = Some(private_ip_address);
    }

    #[must_use]
    pub fn with_private_ip_address(mut self, private_ip_address: String) -> Self {
        self.private_ip_address = Some(private_ip_address);
        self
    }

    pub fn private_ip_address(&self) -> Option<&str> {
        self.private_ip_address.as_deref()
    }

    pub fn reset_private_ip_address(&mut self) {
        self.private_ip_address = None;
    }

    pub fn set_source_dest_check(&mut self, source_dest_check: bool) {
        self.source_dest_check = Some(source_dest_check);
    }

    #[must_use]
    pub fn with_source_dest_check(mut self, source_dest_check: bool) -> Self {
        self.source_dest_check = Some(source_dest_check);
        self
    }

    pub fn source_dest_check(&self) -> Option<bool> {
        self.source_dest_check
    }

    pub fn reset_source_dest_check(&mut self) {
        self.source_dest_check = None;
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    #[must_use]
    pub fn with_status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn reset_status(&mut self) {
        self.status = None;
    }

    pub fn set_subnet_id(&mut self, subnet_id: String) {
        self.subnet_id = Some(subnet_id);
    }

    #[must_use]
    pub fn with_subnet_id(mut self, subnet_id: String) -> Self {
        self.subnet_id = Some(subnet_id);
        self
    }

    pub fn subnet_id(&self) -> Option<&str> {
        self.subnet_id.as_deref()
    }

    pub fn reset_subnet_id(&mut self) {
        self.subnet_id = None;
    }

    pub fn set_vpc_id(&mut self, vpc_id: String) {
        self.vpc_id = Some(vpc_id);
    }

    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: String) -> Self {
        self.vpc_id = Some(vpc_id);
        self
    }

    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    pub fn reset_vpc_id(&mut self) {
        self.vpc_id = None;
    }
}

impl fmt::Display for InstanceNetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Description", self.description.as_deref())?;
        w.list("Groups", self.groups.as_deref())?;
        w.field("MacAddress", self.mac_address.as_deref())?;
        w.field("NetworkInterfaceId", self.network_interface_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("PrivateDnsName", self.private_dns_name.as_deref())?;
        w.field("PrivateIpAddress", self.private_ip_address.as_deref())?;
        w.field("SourceDestCheck", self.source_dest_check.as_ref())?;
        w.field("Status", self.status.as_deref())?;
        w.field("SubnetId", self.subnet_id.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for InstanceNetworkInterface {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.description,
            &self.groups,
            &self.mac_address,
            &self.network_interface_id,
            &self.owner_id,
            &self.private_dns_name,
            &self.private_ip_address,
            &self.source_dest_check,
            &self.status,
            &self.subnet_id,
            &self.vpc_id,
        ])
    }
}

impl std::hash::Hash for InstanceNetworkInterface {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
