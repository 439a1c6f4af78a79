// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{NatGatewayAddress, Tag};

/// NatGateway : Describes a NAT gateway.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NatGateway {
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
    #[serde(rename = "DeleteTime", skip_serializing_if = "Option::is_none")]
    delete_time: Option<DateTime<Utc>>,
    #[serde(rename = "FailureCode", skip_serializing_if = "Option::is_none")]
    failure_code: Option<String>,
    #[serde(rename = "FailureMessage", skip_serializing_if = "Option::is_none")]
    failure_message: Option<String>,
    #[serde(rename = "NatGatewayAddresses", skip_serializing_if = "Option::is_none")]
    nat_gateway_addresses: Option<Vec<NatGatewayAddress>>,
    #[serde(rename = "NatGatewayId", skip_serializing_if = "Option::is_none")]
    nat_gateway_id: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl NatGateway {
    /// Describes a NAT gateway.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_create_time(&mut self, create_time: DateTime<Utc>) {
        self.create_time = Some(create_time);
    }

    #[must_use]
    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(create_time);
        self
    }

    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    pub fn reset_create_time(&mut self) {
        self.create_time = None;
    }

    pub fn set_delete_time(&mut self, delete_time: DateTime<Utc>) {
        self.delete_time = Some(delete_time);
    }

    #[must_use]
    pub fn with_delete_time(mut self, delete_time: DateTime<Utc>) -> Self {
        self.delete_time = Some(delete_time);
        self
    }

    pub fn delete_time(&self) -> Option<&DateTime<Utc>> {
        self.delete_time.as_ref()
    }

    pub fn reset_delete_time(&mut self) {
        self.delete_time = None;
    }

    pub fn set_failure_code(&mut self, failure_code: String) {
        self.failure_code = Some(failure_code);
    }

    #[must_use]
    pub fn with_failure_code(mut self, failure_code: String) -> Self {
        self.failure_code = Some(failure_code);
        self
    }

    pub fn failure_code(&self) -> Option<&str> {
        self.failure_code.as_deref()
    }

    pub fn reset_failure_code(&mut self) {
        self.failure_code = None;
    }

    pub fn set_failure_message(&mut self, failure_message: String) {
        self.failure_message = Some(failure_message);
    }

    #[must_use]
    pub fn with_failure_message(mut self, failure_message: String) -> Self {
        self.failure_message = Some(failure_message);
        self
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    pub fn reset_failure_message(&mut self) {
        self.failure_message = None;
    }

    pub fn set_nat_gateway_addresses(&mut self, nat_gateway_addresses: Vec<NatGatewayAddress>) {
        self.nat_gateway_addresses = Some(nat_gateway_addresses);
    }

    #[must_use]
    pub fn with_nat_gateway_addresses(
        mut self,
        nat_gateway_addresses: Vec<NatGatewayAddress>,
    ) -> Self {
        self.nat_gateway_addresses = Some(nat_gateway_addresses);
        self
    }

    /// Appends one nat gateway address; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_nat_gateway_address(mut self, nat_gateway_address: NatGatewayAddress) -> Self {
        self.nat_gateway_addresses.get_or_insert_with(Vec::new).push(nat_gateway_address);
        self
    }

    pub fn nat_gateway_addresses(&self) -> Option<&[NatGatewayAddress]> {
        self.nat_gateway_addresses.as_deref()
    }

    pub fn reset_nat_gateway_addresses(&mut self) {
        self.nat_gateway_addresses = None;
    }

    pub fn set_nat_gateway_id(&mut self, nat_gateway_id: String) {
        self.nat_gateway_id = Some(nat_gateway_id);
    }

    #[must_use]
    pub fn with_nat_gateway_id(mut self, nat_gateway_id: String) -> Self {
        self.nat_gateway_id = Some(nat_gateway_id);
        self
    }

    pub fn nat_gateway_id(&self) -> Option<&str> {
        self.nat_gateway_id.as_deref()
    }

    pub fn reset_nat_gateway_id(&mut self) {
        self.nat_gateway_id = None;
    }

    /// Accepts the literal string or a typed
    /// [`NatGatewayState`](crate::models::NatGatewayState) value.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
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

impl fmt::Display for NatGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("CreateTime", self.create_time.as_ref())?;
        w.field("DeleteTime", self.delete_time.as_ref())?;
        w.field("FailureCode", self.failure_code.as_deref())?;
        w.field("FailureMessage", self.failure_message.as_deref())?;
        w.list("NatGatewayAddresses", self.nat_gateway_addresses.as_deref())?;
        w.field("NatGatewayId", self.nat_gateway_id.as_deref())?;
        w.field("State", self.state.as_deref())?;
        w.field("SubnetId", self.subnet_id.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for NatGateway {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.create_time,
            &self.delete_time,
            &self.failure_code,
            &self.failure_message,
            &self.nat_gateway_addresses,
            &self.nat_gateway_id,
            &self.state,
            &self.subnet_id,
            &self.vpc_id,
            &self.tags,
        ])
    }
}

impl std::hash::Hash for NatGateway {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
