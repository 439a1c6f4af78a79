// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// UserIdGroupPair : Describes a security group and account ID pair.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserIdGroupPair {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(rename = "PeeringStatus", skip_serializing_if = "Option::is_none")]
    peering_status: Option<String>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(rename = "VpcPeeringConnectionId", skip_serializing_if = "Option::is_none")]
    vpc_peering_connection_id: Option<String>,
}

impl UserIdGroupPair {
    /// Describes a security group and account ID pair.
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

    pub fn set_peering_status(&mut self, peering_status: String) {
        self.peering_status = Some(peering_status);
    }

    #[must_use]
    pub fn with_peering_status(mut self, peering_status: String) -> Self {
        self.peering_status = Some(peering_status);
        self
    }

    pub fn peering_status(&self) -> Option<&str> {
        self.peering_status.as_deref()
    }

    pub fn reset_peering_status(&mut self) {
        self.peering_status = None;
    }

    pub fn set_user_id(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn reset_user_id(&mut self) {
        self.user_id = None;
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

    pub fn set_vpc_peering_connection_id(&mut self, vpc_peering_connection_id: String) {
        self.vpc_peering_connection_id = Some(vpc_peering_connection_id);
    }

    #[must_use]
    pub fn with_vpc_peering_connection_id(mut self, vpc_peering_connection_id: String) -> Self {
        self.vpc_peering_connection_id = Some(vpc_peering_connection_id);
        self
    }

    pub fn vpc_peering_connection_id(&self) -> Option<&str> {
        self.vpc_peering_connection_id.as_deref()
    }

    pub fn reset_vpc_peering_connection_id(&mut self) {
        self.vpc_peering_connection_id = None;
    }
}

impl fmt::Display for UserIdGroupPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Description", self.description.as_deref())?;
        w.field("GroupId", self.group_id.as_deref())?;
        w.field("GroupName", self.group_name.as_deref())?;
        w.field("PeeringStatus", self.peering_status.as_deref())?;
        w.field("UserId", self.user_id.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.field("VpcPeeringConnectionId", self.vpc_peering_connection_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for UserIdGroupPair {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.description,
            &self.group_id,
            &self.group_name,
            &self.peering_status,
            &self.user_id,
            &self.vpc_id,
            &self.vpc_peering_connection_id,
        ])
    }
}

impl std::hash::Hash for UserIdGroupPair {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
