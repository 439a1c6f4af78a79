// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{OnDemandOptions, SpotOptions, Tag, TargetCapacitySpecification};

/// FleetData : Describes a fleet.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FleetData {
    /// Valid values: `error | pending_fulfillment | pending_termination | fulfilled`.
    #[serde(rename = "ActivityStatus", skip_serializing_if = "Option::is_none")]
    activity_status: Option<String>,
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    create_time: Option<DateTime<Utc>>,
    #[serde(rename = "FleetId", skip_serializing_if = "Option::is_none")]
    fleet_id: Option<String>,
    #[serde(rename = "FleetState", skip_serializing_if = "Option::is_none")]
    fleet_state: Option<String>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    /// Valid values: `no-termination | termination`.
    #[serde(rename = "ExcessCapacityTerminationPolicy", skip_serializing_if = "Option::is_none")]
    excess_capacity_termination_policy: Option<String>,
    #[serde(rename = "TargetCapacitySpecification", skip_serializing_if = "Option::is_none")]
    target_capacity_specification: Option<TargetCapacitySpecification>,
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
    #[serde(rename = "SpotOptions", skip_serializing_if = "Option::is_none")]
    spot_options: Option<SpotOptions>,
    #[serde(rename = "OnDemandOptions", skip_serializing_if = "Option::is_none")]
    on_demand_options: Option<OnDemandOptions>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl FleetData {
    /// Describes a fleet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_activity_status(&mut self, activity_status: String) {
        self.activity_status = Some(activity_status);
    }

    #[must_use]
    pub fn with_activity_status(mut self, activity_status: String) -> Self {
        self.activity_status = Some(activity_status);
        self
    }

    pub fn activity_status(&self) -> Option<&str> {
        self.activity_status.as_deref()
    }

    pub fn reset_activity_status(&mut self) {
        self.activity_status = None;
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

    pub fn set_fleet_id(&mut self, fleet_id: String) {
        self.fleet_id = Some(fleet_id);
    }

    #[must_use]
    pub fn with_fleet_id(mut self, fleet_id: String) -> Self {
        self.fleet_id = Some(fleet_id);
        self
    }

    pub fn fleet_id(&self) -> Option<&str> {
        self.fleet_id.as_deref()
    }

    pub fn reset_fleet_id(&mut self) {
        self.fleet_id = None;
    }

    /// Accepts the literal string or a typed
    /// [`FleetStateCode`](crate::models::FleetStateCode) value.
    pub fn set_fleet_state(&mut self, fleet_state: impl Into<String>) {
        self.fleet_state = Some(fleet_state.into());
    }

    #[must_use]
    pub fn with_fleet_state(mut self, fleet_state: impl Into<String>) -> Self {
        self.fleet_state = Some(fleet_state.into());
        self
    }

    pub fn fleet_state(&self) -> Option<&str> {
        self.fleet_state.as_deref()
    }

    pub fn reset_fleet_state(&mut self) {
        self.fleet_state = None;
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

    pub fn set_target_capacity_specification(
        &mut self,
        target_capacity_specification: TargetCapacitySpecification,
    ) {
        self.target_capacity_specification = Some(target_capacity_specification);
    }

    #[must_use]
    pub fn with_target_capacity_specification(
        mut self,
        target_capacity_specification: TargetCapacitySpecification,
    ) -> Self {
        self.target_capacity_specification = Some(target_capacity_specification);
        self
    }

    pub fn target_capacity_specification(&self) -> Option<&TargetCapacitySpecification> {
        self.target_capacity_specification.as_ref()
    }

    pub fn reset_target_capacity_specification(&mut self) {
        self.target_capacity_specification = None;
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

    pub fn set_spot_options(&mut self, spot_options: SpotOptions) {
        self.spot_options = Some(spot_options);
    }

    #[must_use]
    pub fn with_spot_options(mut self, spot_options: SpotOptions) -> Self {
        self.spot_options = Some(spot_options);
        self
    }

    pub fn spot_options(&self) -> Option<&SpotOptions> {
        self.spot_options.as_ref()
    }

    pub fn reset_spot_options(&mut self) {
        self.spot_options = None;
    }

    pub fn set_on_demand_options(&mut self, on_demand_options: OnDemandOptions) {
        self.on_demand_options = Some(on_demand_options);
    }

    #[must_use]
    pub fn with_on_demand_options(mut self, on_demand_options: OnDemandOptions) -> Self {
        self.on_demand_options = Some(on_demand_options);
        self
    }

    pub fn on_demand_options(&self) -> Option<&OnDemandOptions> {
        self.on_demand_options.as_ref()
    }

    pub fn reset_on_demand_options(&mut self) {
        self.on_demand_options = None;
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

impl fmt::Display for FleetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("ActivityStatus", self.activity_status.as_deref())?;
        w.field("CreateTime", self.create_time.as_ref())?;
        w.field("FleetId", self.fleet_id.as_deref())?;
        w.field("FleetState", self.fleet_state.as_deref())?;
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field(
            "ExcessCapacityTerminationPolicy",
            self.excess_capacity_termination_policy.as_deref(),
        )?;
        w.field("TargetCapacitySpecification", self.target_capacity_specification.as_ref())?;
        w.field(
            "TerminateInstancesWithExpiration",
            self.terminate_instances_with_expiration.as_ref(),
        )?;
        w.field("Type", self.fleet_type.as_deref())?;
        w.field("ValidFrom", self.valid_from.as_ref())?;
        w.field("ValidUntil", self.valid_until.as_ref())?;
        w.field("ReplaceUnhealthyInstances", self.replace_unhealthy_instances.as_ref())?;
        w.field("SpotOptions", self.spot_options.as_ref())?;
        w.field("OnDemandOptions", self.on_demand_options.as_ref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for FleetData {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.activity_status,
            &self.create_time,
            &self.fleet_id,
            &self.fleet_state,
            &self.client_token,
            &self.excess_capacity_termination_policy,
            &self.target_capacity_specification,
            &self.terminate_instances_with_expiration,
            &self.fleet_type,
            &self.valid_from,
            &self.valid_until,
            &self.replace_unhealthy_instances,
            &self.spot_options,
            &self.on_demand_options,
            &self.tags,
        ])
    }
}

impl std::hash::Hash for FleetData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
