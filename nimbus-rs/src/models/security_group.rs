// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{IpPermission, Tag};

/// SecurityGroup : Describes a security group.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SecurityGroup {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(rename = "IpPermissions", skip_serializing_if = "Option::is_none")]
    ip_permissions: Option<Vec<IpPermission>>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
    #[serde(rename = "IpPermissionsEgress", skip_serializing_if = "Option::is_none")]
    ip_permissions_egress: Option<Vec<IpPermission>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
}

impl SecurityGroup {
    /// Describes a security group.
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

    pub fn set_group_name(&mut self, group_name: String) {
        self.group_name = Some(group_name);
    }

    #[must_use]
    pub fn with_group_name(mut self, group_name: String) -> Self {
        self.group_name = Some(group_name);
        self
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn reset_group_name(&mut self) {
        self.group_name = None;
    }

    pub fn set_ip_permissions(&mut self, ip_permissions: Vec<IpPermission>) {
        self.ip_permissions = Some(ip_permissions);
    }

    #[must_use]
    pub fn with_ip_permissions(mut self, ip_permissions: Vec<IpPermission>) -> Self {
        self.ip_permissions = Some(ip_permissions);
        self
    }

    /// Appends one ip permission; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_ip_permission(mut self, ip_permission: IpPermission) -> Self {
        self.ip_permissions.get_or_insert_with(Vec::new).push(ip_permission);
        self
    }

    pub fn ip_permissions(&self) -> Option<&[IpPermission]> {
        self.ip_permissions.as_deref()
    }

    pub fn reset_ip_permissions(&mut self) {
        self.ip_permissions = None;
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

    pub fn set_group_id(&mut self, group_id: String) {
        self.group_id = Some(group_id);
    }

    #[must_use]
    pub fn with_group_id(mut self, group_id: String) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn reset_group_id(&mut self) {
        self.group_id = None;
    }

    pub fn set_ip_permissions_egress(&mut self, ip_permissions_egress: Vec<IpPermission>) {
        self.ip_permissions_egress = Some(ip_permissions_egress);
    }

    #[must_use]
    pub fn with_ip_permissions_egress(mut self, ip_permissions_egress: Vec<IpPermission>) -> Self {
        self.ip_permissions_egress = Some(ip_permissions_egress);
        self
    }

    /// Appends one ip permission egress; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_ip_permission_egress(mut self, ip_permission_egress: IpPermission) -> Self {
        self.ip_permissions_egress.get_or_insert_with(Vec::new).push(ip_permission_egress);
        self
    }

    pub fn ip_permissions_egress(&self) -> Option<&[IpPermission]> {
        self.ip_permissions_egress.as_deref()
    }

    pub fn reset_ip_permissions_egress(&mut self) {
        self.ip_permissions_egress = None;
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

impl fmt::Display for SecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Description", self.description.as_deref())?;
        w.field("GroupName", self.group_name.as_deref())?;
        w.list("IpPermissions", self.ip_permissions.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("GroupId", self.group_id.as_deref())?;
        w.list("IpPermissionsEgress", self.ip_permissions_egress.as_deref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for SecurityGroup {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.description,
            &self.group_name,
            &self.ip_permissions,
            &self.owner_id,
            &self.group_id,
            &self.ip_permissions_egress,
            &self.tags,
            &self.vpc_id,
        ])
    }
}

impl std::hash::Hash for SecurityGroup {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
