// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::TagSpecification;

/// SpotFleetRequestConfigData : The configuration of a spot fleet request:
/// how much capacity to acquire, how to pay for it, and how long the request
/// stays active.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SpotFleetRequestConfigData {
    /// Valid values: `lowestPrice | diversified | capacityOptimized`.
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    allocation_strategy: Option<String>,
    /// Valid values: `lowestPrice | prioritized`.
    #[serde(rename = "OnDemandAllocationStrategy", skip_serializing_if = "Option::is_none")]
    on_demand_allocation_strategy: Option<String>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    /// Valid values: `noTermination | default`.
    #[serde(rename = "ExcessCapacityTerminationPolicy", skip_serializing_if = "Option::is_none")]
    excess_capacity_termination_policy: Option<String>,
    #[serde(rename = "IamFleetRole", skip_serializing_if = "Option::is_none")]
    iam_fleet_role: Option<String>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    spot_price: Option<String>,
    #[serde(rename = "TargetCapacity", skip_serializing_if = "Option::is_none")]
    target_capacity: Option<i32>,
    #[serde(rename = "OnDemandTargetCapacity", skip_serializing_if = "Option::is_none")]
    on_demand_target_capacity: Option<i32>,
    #[serde(rename = "OnDemandMaxTotalPrice", skip_serializing_if = "Option::is_none")]
    on_demand_max_total_price: Option<String>,
    #[serde(rename = "SpotMaxTotalPrice", skip_serializing_if = "Option::is_none")]
    spot_max_total_price: Option<String>,
    #[serde(rename = "TerminateInstancesWithExpiration", skip_serializing_if = "Option::is_none")]
    terminate_instances_with_expiration: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    fleet_type: Option<String>,
    #[serde(rename = "ValidFrom", skip_serializing_if = "Option::is_none")]
    valid_from: Option<DateTime<Utc>>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "ReplaceUnhealthyInstances", skip_serializing_if = "Option::is_none")]
    replace_unhealthy_instances: Option<bool>,
    /// Valid values: `hibernate | stop | terminate`.
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    instance_interruption_behavior: Option<String>,
    #[serde(rename = "InstancePoolsToUseCount", skip_serializing_if = "Option::is_none")]
    instance_pools_to_use_count: Option<i32>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    tag_specifications: Option<Vec<TagSpecification>>,
}

impl SpotFleetRequestConfigData {
    /// The configuration of a spot fleet request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allocation_strategy(&mut self, allocation_strategy: String) {
        self.allocation_strategy = Some(allocation_strategy);
    }

    #[must_use]
    pub fn with_allocation_strategy(mut self, allocation_strategy: String) -> Self {
        self.allocation_strategy = Some(allocation_strategy);
        self
    }

    pub fn allocation_strategy(&self) -> Option<&str> {
        self.allocation_strategy.as_deref()
    }

    pub fn reset_allocation_strategy(&mut self) {
        self.allocation_strategy = None;
    }

    pub fn set_on_demand_allocation_strategy(&mut self, on_demand_allocation_strategy: String) {
        self.on_demand_allocation_strategy = Some(on_demand_allocation_strategy);
    }

    #[must_use]
    pub fn with_on_demand_allocation_strategy(
        mut self,
        on_demand_allocation_strategy: String,
    ) -> Self {
        self.on_demand_allocation_strategy = Some(on_demand_allocation_strategy);
        self
    }

    pub fn on_demand_allocation_strategy(&self) -> Option<&str> {
        self.on_demand_allocation_strategy.as_deref()
    }

    pub fn reset_on_demand_allocation_strategy(&mut self) {
        self.on_demand_allocation_strategy = None;
    }

    pub fn set_client_token(&mut self, client_token: String) {
        self.client_token = Some(client_token);
    }

    #[must_use]
    pub fn with_client_token(mut self, client_token: String) -> Self {
        self.client_token = Some(client_token);
        self
    }

    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }

    pub fn reset_client_token(&mut self) {
        self.client_token = None;
    }

    pub fn set_excess_capacity_termination_policy(
        &mut self,
        excess_capacity_termination_policy: String,
    ) {
        self.excess_capacity_termination_policy = Some(excess_capacity_termination_policy);
    }

    #[must_use]
    pub fn with_excess_capacity_termination_policy(
        mut self,
        excess_capacity_termination_policy: String,
    ) -> Self {
        self.excess_capacity_termination_policy = Some(excess_capacity_termination_policy);
        self
    }

    pub fn excess_capacity_termination_policy(&self) -> Option<&str> {
        self.excess_capacity_termination_policy.as_deref()
    }

    pub fn reset_excess_capacity_termination_policy(&mut self) {
        self.excess_capacity_termination_policy = None;
    }

    pub fn set_iam_fleet_role(&mut self, iam_fleet_role: String) {
        self.iam_fleet_role = Some(iam_fleet_role);
    }

    #[must_use]
    pub fn with_iam_fleet_role(mut self, iam_fleet_role: String) -> Self {
        self.iam_fleet_role = Some(iam_fleet_role);
        self
    }

    pub fn iam_fleet_role(&self) -> Option<&str> {
        self.iam_fleet_role.as_deref()
    }

    pub fn reset_iam_fleet_role(&mut self) {
        self.iam_fleet_role = None;
    }

    pub fn set_spot_price(&mut self, spot_price: String) {
        self.spot_price = Some(spot_price);
    }

    #[must_use]
    pub fn with_spot_price(mut self, spot_price: String) -> Self {
        self.spot_price = Some(spot_price);
        self
    }

    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    pub fn reset_spot_price(&mut self) {
        self.spot_price = None;
    }

    pub fn set_target_capacity(&mut self, target_capacity: i32) {
        self.target_capacity = Some(target_capacity);
    }

    #[must_use]
    pub fn with_target_capacity(mut self, target_capacity: i32) -> Self {
        self.target_capacity = Some(target_capacity);
        self
    }

    pub fn target_capacity(&self) -> Option<i32> {
        self.target_capacity
    }

    pub fn reset_target_capacity(&mut self) {
        self.target_capacity = None;
    }

    pub fn set_on_demand_target_capacity(&mut self, on_demand_target_capacity: i32) {
        self.on_demand_target_capacity = Some(on_demand_target_capacity);
    }

    #[must_use]
    pub fn with_on_demand_target_capacity(mut self, on_demand_target_capacity: i32) -> Self {
        self.on_demand_target_capacity = Some(on_demand_target_capacity);
        self
    }

    pub fn on_demand_target_capacity(&self) -> Option<i32> {
        self.on_demand_target_capacity
    }

    pub fn reset_on_demand_target_capacity(&mut self) {
        self.on_demand_target_capacity = None;
    }

    pub fn set_on_demand_max_total_price(&mut self, on_demand_max_total_price: String) {
        self.on_demand_max_total_price = Some(on_demand_max_total_price);
    }

    #[must_use]
    pub fn with_on_demand_max_total_price(mut self, on_demand_max_total_price: String) -> Self {
        self.on_demand_max_total_price = Some(on_demand_max_total_price);
        self
    }

    pub fn on_demand_max_total_price(&self) -> Option<&str> {
        self.on_demand_max_total_price.as_deref()
    }

    pub fn reset_on_demand_max_total_price(&mut self) {
        self.on_demand_max_total_price = None;
    }

    pub fn set_spot_max_total_price(&mut self, spot_max_total_price: String) {
        self.spot_max_total_price = Some(spot_max_total_price);
    }

    #[must_use]
    pub fn with_spot_max_total_price(mut self, spot_max_total_price: String) -> Self {
        self.spot_max_total_price = Some(spot_max_total_price);
        self
    }

    pub fn spot_max_total_price(&self) -> Option<&str> {
        self.spot_max_total_price.as_deref()
    }

    pub fn reset_spot_max_total_price(&mut self) {
        self.spot_max_total_price = None;
    }

    pub fn set_terminate_instances_with_expiration(
        &mut self,
        terminate_instances_with_expiration: bool,
    ) {
        self.terminate_instances_with_expiration = Some(terminate_instances_with_expiration);
    }

    #[must_use]
    pub fn with_terminate_instances_with_expiration(
        mut self,
        terminate_instances_with_expiration: bool,
    ) -> Self {
        self.terminate_instances_with_expiration = Some(terminate_instances_with_expiration);
        self
    }

    pub fn terminate_instances_with_expiration(&self) -> Option<bool> {
        self.terminate_instances_with_expiration
    }

    pub fn reset_terminate_instances_with_expiration(&mut self) {
        self.terminate_instances_with_expiration = None;
    }

    /// Accepts the literal string or a typed
    /// [`FleetType`](crate::models::FleetType) value.
    pub fn set_fleet_type(&mut self, fleet_type: impl Into<String>) {
        self.fleet_type = Some(fleet_type.into());
    }

    #[must_use]
    pub fn with_fleet_type(mut self, fleet_type: impl Into<String>) -> Self {
        self.fleet_type = Some(fleet_type.into());
        self
    }

    pub fn fleet_type(&self) -> Option<&str> {
        self.fleet_type.as_deref()
    }

    pub fn reset_fleet_type(&mut self) {
        self.fleet_type = None;
    }

    pub fn set_valid_from(&mut self, valid_from: DateTime<Utc>) {
        self.valid_from = Some(valid_from);
    }

    #[must_use]
    pub fn with_valid_from(mut self, valid_from: DateTime<Utc>) -> Self {
        self.valid_from = Some(valid_from);
        self
    }

    pub fn valid_from(&self) -> Option<&DateTime<Utc>> {
        self.valid_from.as_ref()
    }

    pub fn reset_valid_from(&mut self) {
        self.valid_from = None;
    }

    pub fn set_valid_until(&mut self, valid_until: DateTime<Utc>) {
        self.valid_until = Some(valid_until);
    }

    #[must_use]
    pub fn with_valid_until(mut self, valid_until: DateTime<Utc>) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    pub fn reset_valid_until(&mut self) {
        self.valid_until = None;
    }

    pub fn set_replace_unhealthy_instances(&mut self, replace_unhealthy_instances: bool) {
        self.replace_unhealthy_instances = Some(replace_unhealthy_instances);
    }

    #[must_use]
    pub fn with_replace_unhealthy_instances(mut self, replace_unhealthy_instances: bool) -> Self {
        self.replace_unhealthy_instances = Some(replace_unhealthy_instances);
        self
    }

    pub fn replace_unhealthy_instances(&self) -> Option<bool> {
        self.replace_unhealthy_instances
    }

    pub fn reset_replace_unhealthy_instances(&mut self) {
        self.replace_unhealthy_instances = None;
    }

    pub fn set_instance_interruption_behavior(&mut self, instance_interruption_behavior: String) {
        self.instance_interruption_behavior = Some(instance_interruption_behavior);
    }

    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: String,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior);
        self
    }

    pub fn instance_interruption_behavior(&self) -> Option<&str> {
        self.instance_interruption_behavior.as_deref()
    }

    pub fn reset_instance_interruption_behavior(&mut self) {
        self.instance_interruption_behavior = None;
    }

    pub fn set_instance_pools_to_use_count(&mut self, instance_pools_to_use_count: i32) {
        self.instance_pools_to_use_count = Some(instance_pools_to_use_count);
    }

    #[must_use]
    pub fn with_instance_pools_to_use_count(mut self, instance_pools_to_use_count: i32) -> Self {
        self.instance_pools_to_use_count = Some(instance_pools_to_use_count);
        self
    }

    pub fn instance_pools_to_use_count(&self) -> Option<i32> {
        self.instance_pools_to_use_count
    }

    pub fn reset_instance_pools_to_use_count(&mut self) {
        self.instance_pools_to_use_count = None;
    }

    pub fn set_tag_specifications(&mut self, tag_specifications: Vec<TagSpecification>) {
        self.tag_specifications = Some(tag_specifications);
    }

    #[must_use]
    pub fn with_tag_specifications(mut self, tag_specifications: Vec<TagSpecification>) -> Self {
        self.tag_specifications = Some(tag_specifications);
        self
    }

    /// Appends one tag specification; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_tag_specification(mut self, tag_specification: TagSpecification) -> Self {
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .push(tag_specification);
        self
    }

    pub fn tag_specifications(&self) -> Option<&[TagSpecification]> {
        self.tag_specifications.as_deref()
    }

    pub fn reset_tag_specifications(&mut self) {
        self.tag_specifications = None;
    }
}

impl fmt::Display for SpotFleetRequestConfigData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AllocationStrategy", self.allocation_strategy.as_deref())?;
        w.field(
            "OnDemandAllocationStrategy",
            self.on_demand_allocation_strategy.as_deref(),
        )?;
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field(
            "ExcessCapacityTerminationPolicy",
            self.excess_capacity_termination_policy.as_deref(),
        )?;
        w.field("IamFleetRole", self.iam_fleet_role.as_deref())?;
        w.field("SpotPrice", self.spot_price.as_deref())?;
        w.field("TargetCapacity", self.target_capacity.as_ref())?;
        w.field("OnDemandTargetCapacity", self.on_demand_target_capacity.as_ref())?;
        w.field("OnDemandMaxTotalPrice", self.on_demand_max_total_price.as_deref())?;
        w.field("SpotMaxTotalPrice", self.spot_max_total_price.as_deref())?;
        w.field(
            "TerminateInstancesWithExpiration",
            self.terminate_instances_with_expiration.as_ref(),
        )?;
        w.field("Type", self.fleet_type.as_deref())?;
        w.field("ValidFrom", self.valid_from.as_ref())?;
        w.field("ValidUntil", self.valid_until.as_ref())?;
        w.field(
            "ReplaceUnhealthyInstances",
            self.replace_unhealthy_instances.as_ref(),
        )?;
        w.field(
            "InstanceInterruptionBehavior",
            self.instance_interruption_behavior.as_deref(),
        )?;
        w.field(
            "InstancePoolsToUseCount",
            self.instance_pools_to_use_count.as_ref(),
        )?;
        w.list("TagSpecifications", self.tag_specifications.as_deref())?;
        w.finish()
    }
}

impl StableHash for SpotFleetRequestConfigData {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.allocation_strategy,
            &self.on_demand_allocation_strategy,
            &self.client_token,
            &self.excess_capacity_termination_policy,
            &self.iam_fleet_role,
            &self.spot_price,
            &self.target_capacity,
            &self.on_demand_target_capacity,
            &self.on_demand_max_total_price,
            &self.spot_max_total_price,
            &self.terminate_instances_with_expiration,
            &self.fleet_type,
            &self.valid_from,
            &self.valid_until,
            &self.replace_unhealthy_instances,
            &self.instance_interruption_behavior,
            &self.instance_pools_to_use_count,
            &self.tag_specifications,
        ])
    }
}

impl std::hash::Hash for SpotFleetRequestConfigData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
