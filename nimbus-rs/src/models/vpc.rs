// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Tag;

/// Vpc : Describes a VPC.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Vpc {
    #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
    cidr_block: Option<String>,
    #[serde(rename = "DhcpOptionsId", skip_serializing_if = "Option::is_none")]
    dhcp_options_id: Option<String>,
    /// Valid values: `pending | available`.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    instance_tenancy: Option<String>,
    #[serde(rename = "IsDefault", skip_serializing_if = "Option::is_none")]
    is_default: Option<bool>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl Vpc {
    /// Describes a VPC.
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_dhcp_options_id(&mut self, dhcp_options_id: String) {
        self.dhcp_options_id = Some(dhcp_options_id);
    }

    #[must_use]
    pub fn with_dhcp_options_id(mut self, dhcp_options_id: String) -> Self {
        self.dhcp_options_id = Some(dhcp_options_id);
        self
    }

    pub fn dhcp_options_id(&self) -> Option<&str> {
        self.dhcp_options_id.as_deref()
    }

    pub fn reset_dhcp_options_id(&mut self) {
        self.dhcp_options_id = None;
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

    /// Accepts the literal string or a typed
    /// [`Tenancy`](crate::models::Tenancy) value.
    pub fn set_instance_tenancy(&mut self, instance_tenancy: impl Into<String>) {
        self.instance_tenancy = Some(instance_tenancy.into());
    }

    #[must_use]
    pub fn with_instance_tenancy(mut self, instance_tenancy: impl Into<String>) -> Self {
        self.instance_tenancy = Some(instance_tenancy.into());
        self
    }

    pub fn instance_tenancy(&self) -> Option<&str> {
        self.instance_tenancy.as_deref()
    }

    pub fn reset_instance_tenancy(&mut self) {
        self.instance_tenancy = None;
    }

    pub fn set_is_default(&mut self, is_default: bool) {
        self.is_default = Some(is_default);
    }

    #[must_use]
    pub fn with_is_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }

    pub fn is_default(&self) -> Option<bool> {
        self.is_default
    }

    pub fn reset_is_default(&mut self) {
        self.is_default = None;
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

impl fmt::Display for Vpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("CidrBlock", self.cidr_block.as_deref())?;
        w.field("DhcpOptionsId", self.dhcp_options_id.as_deref())?;
        w.field("State", self.state.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("InstanceTenancy", self.instance_tenancy.as_deref())?;
        w.field("IsDefault", self.is_default.as_ref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for Vpc {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.cidr_block,
            &self.dhcp_options_id,
            &self.state,
            &self.vpc_id,
            &self.owner_id,
            &self.instance_tenancy,
            &self.is_default,
            &self.tags,
        ])
    }
}

impl std::hash::Hash for Vpc {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
