// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// Placement : Describes the placement of an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Placement {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(rename = "Affinity", skip_serializing_if = "Option::is_none")]
    affinity: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(rename = "PartitionNumber", skip_serializing_if = "Option::is_none")]
    partition_number: Option<i32>,
    #[serde(rename = "HostId", skip_serializing_if = "Option::is_none")]
    host_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    tenancy: Option<String>,
    #[serde(rename = "SpreadDomain", skip_serializing_if = "Option::is_none")]
    spread_domain: Option<String>,
    #[serde(rename = "HostResourceGroupArn", skip_serializing_if = "Option::is_none")]
    host_resource_group_arn: Option<String>,
}

impl Placement {
    /// Describes the placement of an instance.
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

    pub fn set_affinity(&mut self, affinity: String) {
        self.affinity = Some(affinity);
    }

    #[must_use]
    pub fn with_affinity(mut self, affinity: String) -> Self {
        self.affinity = Some(affinity);
        self
    }

    pub fn affinity(&self) -> Option<&str> {
        self.affinity.as_deref()
    }

    pub fn reset_affinity(&mut self) {
        self.affinity = None;
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

    pub fn set_partition_number(&mut self, partition_number: i32) {
        self.partition_number = Some(partition_number);
    }

    #[must_use]
    pub fn with_partition_number(mut self, partition_number: i32) -> Self {
        self.partition_number = Some(partition_number);
        self
    }

    pub fn partition_number(&self) -> Option<i32> {
        self.partition_number
    }

    pub fn reset_partition_number(&mut self) {
        self.partition_number = None;
    }

    pub fn set_host_id(&mut self, host_id: String) {
        self.host_id = Some(host_id);
    }

    #[must_use]
    pub fn with_host_id(mut self, host_id: String) -> Self {
        self.host_id = Some(host_id);
        self
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    pub fn reset_host_id(&mut self) {
        self.host_id = None;
    }

    /// Accepts the literal string or a typed
    /// [`Tenancy`](crate::models::Tenancy) value.
    pub fn set_tenancy(&mut self, tenancy: impl Into<String>) {
        self.tenancy = Some(tenancy.into());
    }

    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<String>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }

    pub fn tenancy(&self) -> Option<&str> {
        self.tenancy.as_deref()
    }

    pub fn reset_tenancy(&mut self) {
        self.tenancy = None;
    }

    pub fn set_spread_domain(&mut self, spread_domain: String) {
        self.spread_domain = Some(spread_domain);
    }

    #[must_use]
    pub fn with_spread_domain(mut self, spread_domain: String) -> Self {
        self.spread_domain = Some(spread_domain);
        self
    }

    pub fn spread_domain(&self) -> Option<&str> {
        self.spread_domain.as_deref()
    }

    pub fn reset_spread_domain(&mut self) {
        self.spread_domain = None;
    }

    pub fn set_host_resource_group_arn(&mut self, host_resource_group_arn: String) {
        self.host_resource_group_arn = Some(host_resource_group_arn);
    }

    #[must_use]
    pub fn with_host_resource_group_arn(mut self, host_resource_group_arn: String) -> Self {
        self.host_resource_group_arn = Some(host_resource_group_arn);
        self
    }

    pub fn host_resource_group_arn(&self) -> Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    pub fn reset_host_resource_group_arn(&mut self) {
        self.host_resource_group_arn = None;
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AvailabilityZone", self.availability_zone.as_deref())?;
        w.field("Affinity", self.affinity.as_deref())?;
        w.field("GroupName", self.group_name.as_deref())?;
        w.field("PartitionNumber", self.partition_number.as_ref())?;
        w.field("HostId", self.host_id.as_deref())?;
        w.field("Tenancy", self.tenancy.as_deref())?;
        w.field("SpreadDomain", self.spread_domain.as_deref())?;
        w.field("HostResourceGroupArn", self.host_resource_group_arn.as_deref())?;
        w.finish()
    }
}

impl StableHash for Placement {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.availability_zone,
            &self.affinity,
            &self.group_name,
            &self.partition_number,
            &self.host_id,
            &self.tenancy,
            &self.spread_domain,
            &self.host_resource_group_arn,
        ])
    }
}

impl std::hash::Hash for Placement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
