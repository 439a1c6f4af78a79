// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Tag;

/// Subnet : Describes a subnet.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Subnet {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(rename = "AvailabilityZoneId", skip_serializing_if = "Option::is_none")]
    availability_zone_id: Option<String>,
    #[serde(rename = "AvailableIpAddressCount", skip_serializing_if = "Option::is_none")]
    available_ip_address_count: Option<i32>,
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    cidr_block: Option<String>,
    #[serde(rename = "DefaultForAz", skip_serializing_if = "Option::is_none")]
    default_for_az: Option<bool>,
    #[serde(rename = "MapPublicIpOnLaunch", skip_serializing_if = "Option::is_none")]
    map_public_ip_on_launch: Option<bool>,
    /// Valid values: `pending | available`.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "AssignIpv6AddressOnCreation", skip_serializing_if = "Option::is_none")]
    assign_ipv6_address_on_creation: Option<bool>,
    #[serde(rename = "SubnetArn", skip_serializing_if = "Option::is_none")]
    subnet_arn: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl Subnet {
    /// Describes a subnet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_availability_zone(&mut self, availability_zone: String) {
        self.availability_zone = Some(availability_zone);
    }

    #[must_use]
    pub fn with_availability_zone(mut self, availability_zone: String) -> Self {
        self.availability_zone = Some(availability_zone);
        self
    }

    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    pub fn reset_availability_zone(&mut self) {
        self.availability_zone = None;
    }

    pub fn set_availability_zone_id(&mut self, availability_zone_id: String) {
        self.availability_zone_id = Some(availability_zone_id);
    }

    #[must_use]
    pub fn with_availability_zone_id(mut self, availability_zone_id: String) -> Self {
        self.availability_zone_id = Some(availability_zone_id);
        self
    }

    pub fn availability_zone_id(&self) -> Option<&str> {
        self.availability_zone_id.as_deref()
    }

    pub fn reset_availability_zone_id(&mut self) {
        self.availability_zone_id = None;
    }

    pub fn set_available_ip_address_count(&mut self, available_ip_address_count: i32) {
        self.available_ip_address_count = Some(available_ip_address_count);
    }

    #[must_use]
    pub fn with_available_ip_address_count(mut self, available_ip_address_count: i32) -> Self {
        self.available_ip_address_count = Some(available_ip_address_count);
        self
    }

    pub fn available_ip_address_count(&self) -> Option<i32> {
        self.available_ip_address_count
    }

    pub fn reset_available_ip_address_count(&mut self) {
        self.available_ip_address_count = None;
    }

    pub fn set_cidr_block(&mut self, cidr_block: String) {
        self.cidr_block = Some(cidr_block);
    }

    #[must_use]
    pub fn with_cidr_block(mut self, cidr_block: String) -> Self {
        self.cidr_block = Some(cidr_block);
        self
    }

    pub fn cidr_block(&self) -> Option<&str> {
        self.cidr_block.as_deref()
    }

    pub fn reset_cidr_block(&mut self) {
        self.cidr_block = None;
    }

    pub fn set_default_for_az(&mut self, default_for_az: bool) {
        self.default_for_az = Some(default_for_az);
    }

    #[must_use]
    pub fn with_default_for_az(mut self, default_for_az: bool) -> Self {
        self.default_for_az = Some(default_for_az);
        self
    }

    pub fn default_for_az(&self) -> Option<bool> {
        self.default_for_az
    }

    pub fn reset_default_for_az(&mut self) {
        self.default_for_az = None;
    }

    pub fn set_map_public_ip_on_launch(&mut self, map_public_ip_on_launch: bool) {
        self.map_public_ip_on_launch = Some(map_public_ip_on_launch);
    }

    #[must_use]
    pub fn with_map_public_ip_on_launch(mut self, map_public_ip_on_launch: bool) -> Self {
        self.map_public_ip_on_launch = Some(map_public_ip_on_launch);
        self
    }

    pub fn map_public_ip_on_launch(&self) -> Option<bool> {
        self.map_public_ip_on_launch
    }

    pub fn reset_map_public_ip_on_launch(&mut self) {
        self.map_public_ip_on_launch = None;
    }

    pub fn set_state(&mut self, state: String) {
        self.state = Some(state);
    }

    #[must_use]
    pub fn with_state(mut self, state: String) -> Self {
        self.state = Some(state);
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn reset_state(&mut self) {
        self.state = None;
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

    pub fn set_assign_ipv6_address_on_creation(&mut self, assign_ipv6_address_on_creation: bool) {
        self.assign_ipv6_address_on_creation = Some(assign_ipv6_address_on_creation);
    }

    #[must_use]
    pub fn with_assign_ipv6_address_on_creation(
        mut self,
        assign_ipv6_address_on_creation: bool,
    ) -> Self {
        self.assign_ipv6_address_on_creation = Some(assign_ipv6_address_on_creation);
        self
    }

    pub fn assign_ipv6_address_on_creation(&self) -> Option<bool> {
        self.assign_ipv6_address_on_creation
    }

    pub fn reset_assign_ipv6_address_on_creation(&mut self) {
        self.assign_ipv6_address_on_creation = None;
    }

    pub fn set_subnet_arn(&mut self, subnet_arn: String) {
        self.subnet_arn = Some(subnet_arn);
    }

    #[must_use]
    pub fn with_subnet_arn(mut self, subnet_arn: String) -> Self {
        self.subnet_arn = Some(subnet_arn);
        self
    }

    pub fn subnet_arn(&self) -> Option<&str> {
        self.subnet_arn.as_deref()
    }

    pub fn reset_subnet_arn(&mut self) {
        self.subnet_arn = None;
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = Some(tags);
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Appends one tag; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn reset_tags(&mut self) {
        self.tags = None;
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AvailabilityZone", self.availability_zone.as_deref())?;
        w.field("AvailabilityZoneId", self.availability_zone_id.as_deref())?;
        w.field("AvailableIpAddressCount", self.available_ip_address_count.as_ref())?;
        w.field("CidrBlock", self.cidr_block.as_deref())?;
        w.field("DefaultForAz", self.default_for_az.as_ref())?;
        w.field("MapPublicIpOnLaunch", self.map_public_ip_on_launch.as_ref())?;
        w.field("State", self.state.as_deref())?;
        w.field("SubnetId", self.subnet_id.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("AssignIpv6AddressOnCreation", self.assign_ipv6_address_on_creation.as_ref())?;
        w.field("SubnetArn", self.subnet_arn.as_deref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for Subnet {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.availability_zone,
            &self.availability_zone_id,
            &self.available_ip_address_count,
            &self.cidr_block,
            &self.default_for_az,
            &self.map_public_ip_on_launch,
            &self.state,
            &self.subnet_id,
            &self.vpc_id,
            &self.owner_id,
            &self.assign_ipv6_address_on_creation,
            &self.subnet_arn,
            &self.tags,
        ])
    }
}

impl std::hash::Hash for Subnet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
