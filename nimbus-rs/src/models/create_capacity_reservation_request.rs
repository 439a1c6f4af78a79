// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::TagSpecification;

/// CreateCapacityReservationRequest : Parameters for reserving compute
/// capacity ahead of launching into it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateCapacityReservationRequest {
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    /// Valid values: `Linux/UNIX | Red Hat Enterprise Linux | SUSE Linux |
    /// Windows | Windows with SQL Server | Windows with SQL Server Enterprise
    /// | Windows with SQL Server Standard | Windows with SQL Server Web`.
    #[serde(rename = "InstancePlatform", skip_serializing_if = "Option::is_none")]
    instance_platform: Option<String>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(rename = "AvailabilityZoneId", skip_serializing_if = "Option::is_none")]
    availability_zone_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    tenancy: Option<String>,
    #[serde(rename = "InstanceCount", skip_serializing_if = "Option::is_none")]
    instance_count: Option<i32>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    ebs_optimized: Option<bool>,
    #[serde(rename = "EphemeralStorage", skip_serializing_if = "Option::is_none")]
    ephemeral_storage: Option<bool>,
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime<Utc>>,
    /// Valid values: `unlimited | limited`.
    #[serde(rename = "EndDateType", skip_serializing_if = "Option::is_none")]
    end_date_type: Option<String>,
    /// Valid values: `open | targeted`.
    #[serde(rename = "InstanceMatchCriteria", skip_serializing_if = "Option::is_none")]
    instance_match_criteria: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
}

impl CreateCapacityReservationRequest {
    /// Parameters for reserving compute capacity ahead of launching into it.
    pub fn new() -> Self {
        Self::default()
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

    /// Accepts the literal string or a typed
    /// [`InstanceType`](crate::models::InstanceType) value.
    pub fn set_instance_type(&mut self, instance_type: impl Into<String>) {
        self.instance_type = Some(instance_type.into());
    }

    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn reset_instance_type(&mut self) {
        self.instance_type = None;
    }

    pub fn set_instance_platform(&mut self, instance_platform: String) {
        self.instance_platform = Some(instance_platform);
    }

    #[must_use]
    pub fn with_instance_platform(mut self, instance_platform: String) -> Self {
        self.instance_platform = Some(instance_platform);
        self
    }

    pub fn instance_platform(&self) -> Option<&str> {
        self.instance_platform.as_deref()
    }

    pub fn reset_instance_platform(&mut self) {
        self.instance_platform = None;
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

    pub fn set_availability_zone_id(&mut self, availability_zone_id: String) {
        self.availability_zone_id = Some(availability_zone_id);
    }

    #[must_use]
    pub fn with_availability_zone_id(mut self, availability_zone_id: String) -> Self {
        self.availability_zone_id = Some(availability_zone_id);
        self
    }

    pub fn availability_zone_id(&self) -> Option<&str> {
        self.availability_zone_id.as_deref()
    }

    pub fn reset_availability_zone_id(&mut self) {
        self.availability_zone_id = None;
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

    pub fn set_instance_count(&mut self, instance_count: i32) {
        self.instance_count = Some(instance_count);
    }

    #[must_use]
    pub fn with_instance_count(mut self, instance_count: i32) -> Self {
        self.instance_count = Some(instance_count);
        self
    }

    pub fn instance_count(&self) -> Option<i32> {
        self.instance_count
    }

    pub fn reset_instance_count(&mut self) {
        self.instance_count = None;
    }

    pub fn set_ebs_optimized(&mut self, ebs_optimized: bool) {
        self.ebs_optimized = Some(ebs_optimized);
    }

    #[must_use]
    pub fn with_ebs_optimized(mut self, ebs_optimized: bool) -> Self {
        self.ebs_optimized = Some(ebs_optimized);
        self
    }

    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    pub fn reset_ebs_optimized(&mut self) {
        self.ebs_optimized = None;
    }

    pub fn set_ephemeral_storage(&mut self, ephemeral_storage: bool) {
        self.ephemeral_storage = Some(ephemeral_storage);
    }

    #[must_use]
    pub fn with_ephemeral_storage(mut self, ephemeral_storage: bool) -> Self {
        self.ephemeral_storage = Some(ephemeral_storage);
        self
    }

    pub fn ephemeral_storage(&self) -> Option<bool> {
        self.ephemeral_storage
    }

    pub fn reset_ephemeral_storage(&mut self) {
        self.ephemeral_storage = None;
    }

    pub fn set_end_date(&mut self, end_date: DateTime<Utc>) {
        self.end_date = Some(end_date);
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn end_date(&self) -> Option<&DateTime<Utc>> {
        self.end_date.as_ref()
    }

    pub fn reset_end_date(&mut self) {
        self.end_date = None;
    }

    pub fn set_end_date_type(&mut self, end_date_type: String) {
        self.end_date_type = Some(end_date_type);
    }

    #[must_use]
    pub fn with_end_date_type(mut self, end_date_type: String) -> Self {
        self.end_date_type = Some(end_date_type);
        self
    }

    pub fn end_date_type(&self) -> Option<&str> {
        self.end_date_type.as_deref()
    }

    pub fn reset_end_date_type(&mut self) {
        self.end_date_type = None;
    }

    pub fn set_instance_match_criteria(&mut self, instance_match_criteria: String) {
        self.instance_match_criteria = Some(instance_match_criteria);
    }

    #[must_use]
    pub fn with_instance_match_criteria(mut self, instance_match_criteria: String) -> Self {
        self.instance_match_criteria = Some(instance_match_criteria);
        self
    }

    pub fn instance_match_criteria(&self) -> Option<&str> {
        self.instance_match_criteria.as_deref()
    }

    pub fn reset_instance_match_criteria(&mut self) {
        self.instance_match_criteria = None;
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

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = Some(dry_run);
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn dry_run(&self) -> Option<bool> {
        self.dry_run
    }

    pub fn reset_dry_run(&mut self) {
        self.dry_run = None;
    }
}

impl fmt::Display for CreateCapacityReservationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field("InstanceType", self.instance_type.as_deref())?;
        w.field("InstancePlatform", self.instance_platform.as_deref())?;
        w.field("AvailabilityZone", self.availability_zone.as_deref())?;
        w.field("AvailabilityZoneId", self.availability_zone_id.as_deref())?;
        w.field("Tenancy", self.tenancy.as_deref())?;
        w.field("InstanceCount", self.instance_count.as_ref())?;
        w.field("EbsOptimized", self.ebs_optimized.as_ref())?;
        w.field("EphemeralStorage", self.ephemeral_storage.as_ref())?;
        w.field("EndDate", self.end_date.as_ref())?;
        w.field("EndDateType", self.end_date_type.as_deref())?;
        w.field("InstanceMatchCriteria", self.instance_match_criteria.as_deref())?;
        w.list("TagSpecifications", self.tag_specifications.as_deref())?;
        w.field("DryRun", self.dry_run.as_ref())?;
        w.finish()
    }
}

impl StableHash for CreateCapacityReservationRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.client_token,
            &self.instance_type,
            &self.instance_platform,
            &self.availability_zone,
            &self.availability_zone_id,
            &self.tenancy,
            &self.instance_count,
            &self.ebs_optimized,
            &self.ephemeral_storage,
            &self.end_date,
            &self.end_date_type,
            &self.instance_match_criteria,
            &self.tag_specifications,
            &self.dry_run,
        ])
    }
}

impl std::hash::Hash for CreateCapacityReservationRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
