// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// TargetCapacitySpecification : The capacity units a fleet requests, by purchasing option.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TargetCapacitySpecification {
    #[serde(rename = "TotalTargetCapacity", skip_serializing_if = "Option::is_none")]
    total_target_capacity: Option<i32>,
    #[serde(rename = "OnDemandTargetCapacity", skip_serializing_if = "Option::is_none")]
    on_demand_target_capacity: Option<i32>,
    #[serde(rename = "SpotTargetCapacity", skip_serializing_if = "Option::is_none")]
    spot_target_capacity: Option<i32>,
    /// Valid values: `spot | on-demand`.
    #[serde(rename = "DefaultTargetCapacityType", skip_serializing_if = "Option::is_none")]
    default_target_capacity_type: Option<String>,
}

impl TargetCapacitySpecification {
    /// The capacity units a fleet requests, by purchasing option.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total_target_capacity(&mut self, total_target_capacity: i32) {
        self.total_target_capacity = Some(total_target_capacity);
    }

    #[must_use]
    pub fn with_total_target_capacity(mut self, total_target_capacity: i32) -> Self {
        self.total_target_capacity = Some(total_target_capacity);
        self
    }

    pub fn total_target_capacity(&self) -> Option<i32> {
        self.total_target_capacity
    }

    pub fn reset_total_target_capacity(&mut self) {
        self.total_target_capacity = None;
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

    pub fn set_spot_target_capacity(&mut self, spot_target_capacity: i32) {
        self.spot_target_capacity = Some(spot_target_capacity);
    }

    #[must_use]
    pub fn with_spot_target_capacity(mut self, spot_target_capacity: i32) -> Self {
        self.spot_target_capacity = Some(spot_target_capacity);
        self
    }

    pub fn spot_target_capacity(&self) -> Option<i32> {
        self.spot_target_capacity
    }

    pub fn reset_spot_target_capacity(&mut self) {
        self.spot_target_capacity = None;
    }

    pub fn set_default_target_capacity_type(&mut self, default_target_capacity_type: String) {
        self.default_target_capacity_type = Some(default_target_capacity_type);
    }

    #[must_use]
    pub fn with_default_target_capacity_type(
        mut self,
        default_target_capacity_type: String,
    ) -> Self {
        self.default_target_capacity_type = Some(default_target_capacity_type);
        self
    }

    pub fn default_target_capacity_type(&self) -> Option<&str> {
        self.default_target_capacity_type.as_deref()
    }

    pub fn reset_default_target_capacity_type(&mut self) {
        self.default_target_capacity_type = None;
    }
}

impl fmt::Display for TargetCapacitySpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("TotalTargetCapacity", self.total_target_capacity.as_ref())?;
        w.field("OnDemandTargetCapacity", self.on_demand_target_capacity.as_ref())?;
        w.field("SpotTargetCapacity", self.spot_target_capacity.as_ref())?;
        w.field("DefaultTargetCapacityType", self.default_target_capacity_type.as_deref())?;
        w.finish()
    }
}

impl StableHash for TargetCapacitySpecification {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.total_target_capacity,
            &self.on_demand_target_capacity,
            &self.spot_target_capacity,
            &self.default_target_capacity_type,
        ])
    }
}

impl std::hash::Hash for TargetCapacitySpecification {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
