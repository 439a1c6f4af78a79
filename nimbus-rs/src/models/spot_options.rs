// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// SpotOptions : The configuration of spot instances in a fleet.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SpotOptions {
    /// Valid values: `lowest-price | diversified | capacity-optimized`.
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    allocation_strategy: Option<String>,
    /// Valid values: `hibernate | stop | terminate`.
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    instance_interruption_behavior: Option<String>,
    #[serde(rename = "InstancePoolsToUseCount", skip_serializing_if = "Option::is_none")]
    instance_pools_to_use_count: Option<i32>,
    #[serde(rename = "SingleInstanceType", skip_serializing_if = "Option::is_none")]
    single_instance_type: Option<bool>,
    #[serde(rename = "SingleAvailabilityZone", skip_serializing_if = "Option::is_none")]
    single_availability_zone: Option<bool>,
    #[serde(rename = "MinTargetCapacity", skip_serializing_if = "Option::is_none")]
    min_target_capacity: Option<i32>,
    #[serde(rename = "MaxTotalPrice", skip_serializing_if = "Option::is_none")]
    max_total_price: Option<String>,
}

impl SpotOptions {
    /// The configuration of spot instances in a fleet.
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

    pub fn set_single_instance_type(&mut self, single_instance_type: bool) {
        self.single_instance_type = Some(single_instance_type);
    }

    #[must_use]
    pub fn with_single_instance_type(mut self, single_instance_type: bool) -> Self {
        self.single_instance_type = Some(single_instance_type);
        self
    }

    pub fn single_instance_type(&self) -> Option<bool> {
        self.single_instance_type
    }

    pub fn reset_single_instance_type(&mut self) {
        self.single_instance_type = None;
    }

    pub fn set_single_availability_zone(&mut self, single_availability_zone: bool) {
        self.single_availability_zone = Some(single_availability_zone);
    }

    #[must_use]
    pub fn with_single_availability_zone(mut self, single_availability_zone: bool) -> Self {
        self.single_availability_zone = Some(single_availability_zone);
        self
    }

    pub fn single_availability_zone(&self) -> Option<bool> {
        self.single_availability_zone
    }

    pub fn reset_single_availability_zone(&mut self) {
        self.single_availability_zone = None;
    }

    pub fn set_min_target_capacity(&mut self, min_target_capacity: i32) {
        self.min_target_capacity = Some(min_target_capacity);
    }

    #[must_use]
    pub fn with_min_target_capacity(mut self, min_target_capacity: i32) -> Self {
        self.min_target_capacity = Some(min_target_capacity);
        self
    }

    pub fn min_target_capacity(&self) -> Option<i32> {
        self.min_target_capacity
    }

    pub fn reset_min_target_capacity(&mut self) {
        self.min_target_capacity = None;
    }

    pub fn set_max_total_price(&mut self, max_total_price: String) {
        self.max_total_price = Some(max_total_price);
    }

    #[must_use]
    pub fn with_max_total_price(mut self, max_total_price: String) -> Self {
        self.max_total_price = Some(max_total_price);
        self
    }

    pub fn max_total_price(&self) -> Option<&str> {
        self.max_total_price.as_deref()
    }

    pub fn reset_max_total_price(&mut self) {
        self.max_total_price = None;
    }
}

impl fmt::Display for SpotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AllocationStrategy", self.allocation_strategy.as_deref())?;
        w.field("InstanceInterruptionBehavior", self.instance_interruption_behavior.as_deref())?;
        w.field("InstancePoolsToUseCount", self.instance_pools_to_use_count.as_ref())?;
        w.field("SingleInstanceType", self.single_instance_type.as_ref())?;
        w.field("SingleAvailabilityZone", self.single_availability_zone.as_ref())?;
        w.field("MinTargetCapacity", self.min_target_capacity.as_ref())?;
        w.field("MaxTotalPrice", self.max_total_price.as_deref())?;
        w.finish()
    }
}

impl StableHash for SpotOptions {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.allocation_strategy,
            &self.instance_interruption_behavior,
            &self.instance_pools_to_use_count,
            &self.single_instance_type,
            &self.single_availability_zone,
            &self.min_target_capacity,
            &self.max_total_price,
        ])
    }
}

impl std::hash::Hash for SpotOptions {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
