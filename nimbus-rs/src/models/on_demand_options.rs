// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// OnDemandOptions : The configuration of on-demand instances in a fleet.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OnDemandOptions {
    /// Valid values: `lowest-price | prioritized`.
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    allocation_strategy: Option<String>,
    #[serde(rename = "SingleInstanceType", skip_serializing_if = "Option::is_none")]
    single_instance_type: Option<bool>,
    #[serde(rename = "SingleAvailabilityZone", skip_serializing_if = "Option::is_none")]
    single_availability_zone: Option<bool>,
    #[serde(rename = "MinTargetCapacity", skip_serializing_if = "Option::is_none")]
    min_target_capacity: Option<i32>,
    #[serde(rename = "MaxTotalPrice", skip_serializing_if = "Option::is_none")]
    max_total_price: Option<String>,
}

impl OnDemandOptions {
    /// The configuration of on-demand instances in a fleet.
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

impl fmt::Display for OnDemandOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AllocationStrategy", self.allocation_strategy.as_deref())?;
        w.field("SingleInstanceType", self.single_instance_type.as_ref())?;
        w.field("SingleAvailabilityZone", self.single_availability_zone.as_ref())?;
        w.field("MinTargetCapacity", self.min_target_capacity.as_ref())?;
        w.field("MaxTotalPrice", self.max_total_price.as_deref())?;
        w.finish()
    }
}

impl StableHash for OnDemandOptions {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.allocation_strategy,
            &self.single_instance_type,
            &self.single_availability_zone,
            &self.min_target_capacity,
            &self.max_total_price,
        ])
    }
}

impl std::hash::Hash for OnDemandOptions {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
