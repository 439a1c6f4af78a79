// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Filter;

/// DescribeReservedInstancesOfferingsRequest : Parameters for listing the
/// reserved capacity offerings available for purchase.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DescribeReservedInstancesOfferingsRequest {
    #[serde(rename = "ReservedInstancesOfferingIds", skip_serializing_if = "Option::is_none")]
    reserved_instances_offering_ids: Option<Vec<String>>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    /// Valid values: `Linux/UNIX | Linux/UNIX (Amazon VPC) | Windows |
    /// Windows (Amazon VPC)`.
    #[serde(rename = "ProductDescription", skip_serializing_if = "Option::is_none")]
    product_description: Option<String>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<Filter>>,
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    instance_tenancy: Option<String>,
    /// Valid values: `Heavy Utilization | Medium Utilization | Light
    /// Utilization | No Upfront | Partial Upfront | All Upfront`.
    #[serde(rename = "OfferingType", skip_serializing_if = "Option::is_none")]
    offering_type: Option<String>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(rename = "IncludeMarketplace", skip_serializing_if = "Option::is_none")]
    include_marketplace: Option<bool>,
    #[serde(rename = "MinDuration", skip_serializing_if = "Option::is_none")]
    min_duration: Option<i64>,
    #[serde(rename = "MaxDuration", skip_serializing_if = "Option::is_none")]
    max_duration: Option<i64>,
    #[serde(rename = "MaxInstanceCount", skip_serializing_if = "Option::is_none")]
    max_instance_count: Option<i32>,
}

impl DescribeReservedInstancesOfferingsRequest {
    /// Parameters for listing the reserved capacity offerings available for
    /// purchase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reserved_instances_offering_ids(
        &mut self,
        reserved_instances_offering_ids: Vec<String>,
    ) {
        self.reserved_instances_offering_ids = Some(reserved_instances_offering_ids);
    }

    #[must_use]
    pub fn with_reserved_instances_offering_ids(
        mut self,
        reserved_instances_offering_ids: Vec<String>,
    ) -> Self {
        self.reserved_instances_offering_ids = Some(reserved_instances_offering_ids);
        self
    }

    /// Appends one offering id; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_reserved_instances_offering_id(
        mut self,
        reserved_instances_offering_id: String,
    ) -> Self {
        self.reserved_instances_offering_ids
            .get_or_insert_with(Vec::new)
            .push(reserved_instances_offering_id);
        self
    }

    pub fn reserved_instances_offering_ids(&self) -> Option<&[String]> {
        self.reserved_instances_offering_ids.as_deref()
    }

    pub fn reset_reserved_instances_offering_ids(&mut self) {
        self.reserved_instances_offering_ids = None;
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

    pub fn set_product_description(&mut self, product_description: String) {
        self.product_description = Some(product_description);
    }

    #[must_use]
    pub fn with_product_description(mut self, product_description: String) -> Self {
        self.product_description = Some(product_description);
        self
    }

    pub fn product_description(&self) -> Option<&str> {
        self.product_description.as_deref()
    }

    pub fn reset_product_description(&mut self) {
        self.product_description = None;
    }

    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = Some(filters);
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Appends one filter; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.get_or_insert_with(Vec::new).push(filter);
        self
    }

    pub fn filters(&self) -> Option<&[Filter]> {
        self.filters.as_deref()
    }

    pub fn reset_filters(&mut self) {
        self.filters = None;
    }

    /// Accepts the literal string or a typed
    /// [`Tenancy`](crate::models::Tenancy) value.
    pub fn set_instance_tenancy(&mut self, instance_tenancy: impl Into<String>) {
        self.instance_tenancy = Some(instance_tenancy.into());
    }

    #[must_use]
    pub fn with_instance_tenancy(mut self, instance_tenancy: impl Into<String>) -> Self {
        self.instance_tenancy = Some(instance_tenancy.into());
        self
    }

    pub fn instance_tenancy(&self) -> Option<&str> {
        self.instance_tenancy.as_deref()
    }

    pub fn reset_instance_tenancy(&mut self) {
        self.instance_tenancy = None;
    }

    pub fn set_offering_type(&mut self, offering_type: String) {
        self.offering_type = Some(offering_type);
    }

    #[must_use]
    pub fn with_offering_type(mut self, offering_type: String) -> Self {
        self.offering_type = Some(offering_type);
        self
    }

    pub fn offering_type(&self) -> Option<&str> {
        self.offering_type.as_deref()
    }

    pub fn reset_offering_type(&mut self) {
        self.offering_type = None;
    }

    pub fn set_next_token(&mut self, next_token: String) {
        self.next_token = Some(next_token);
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: String) -> Self {
        self.next_token = Some(next_token);
        self
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn reset_next_token(&mut self) {
        self.next_token = None;
    }

    pub fn set_max_results(&mut self, max_results: i32) {
        self.max_results = Some(max_results);
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    pub fn reset_max_results(&mut self) {
        self.max_results = None;
    }

    pub fn set_include_marketplace(&mut self, include_marketplace: bool) {
        self.include_marketplace = Some(include_marketplace);
    }

    #[must_use]
    pub fn with_include_marketplace(mut self, include_marketplace: bool) -> Self {
        self.include_marketplace = Some(include_marketplace);
        self
    }

    pub fn include_marketplace(&self) -> Option<bool> {
        self.include_marketplace
    }

    pub fn reset_include_marketplace(&mut self) {
        self.include_marketplace = None;
    }

    pub fn set_min_duration(&mut self, min_duration: i64) {
        self.min_duration = Some(min_duration);
    }

    #[must_use]
    pub fn with_min_duration(mut self, min_duration: i64) -> Self {
        self.min_duration = Some(min_duration);
        self
    }

    pub fn min_duration(&self) -> Option<i64> {
        self.min_duration
    }

    pub fn reset_min_duration(&mut self) {
        self.min_duration = None;
    }

    pub fn set_max_duration(&mut self, max_duration: i64) {
        self.max_duration = Some(max_duration);
    }

    #[must_use]
    pub fn with_max_duration(mut self, max_duration: i64) -> Self {
        self.max_duration = Some(max_duration);
        self
    }

    pub fn max_duration(&self) -> Option<i64> {
        self.max_duration
    }

    pub fn reset_max_duration(&mut self) {
        self.max_duration = None;
    }

    pub fn set_max_instance_count(&mut self, max_instance_count: i32) {
        self.max_instance_count = Some(max_instance_count);
    }

    #[must_use]
    pub fn with_max_instance_count(mut self, max_instance_count: i32) -> Self {
        self.max_instance_count = Some(max_instance_count);
        self
    }

    pub fn max_instance_count(&self) -> Option<i32> {
        self.max_instance_count
    }

    pub fn reset_max_instance_count(&mut self) {
        self.max_instance_count = None;
    }
}

impl fmt::Display for DescribeReservedInstancesOfferingsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list(
            "ReservedInstancesOfferingIds",
            self.reserved_instances_offering_ids.as_deref(),
        )?;
        w.field("InstanceType", self.instance_type.as_deref())?;
        w.field("AvailabilityZone", self.availability_zone.as_deref())?;
        w.field("ProductDescription", self.product_description.as_deref())?;
        w.list("Filters", self.filters.as_deref())?;
        w.field("InstanceTenancy", self.instance_tenancy.as_deref())?;
        w.field("OfferingType", self.offering_type.as_deref())?;
        w.field("NextToken", self.next_token.as_deref())?;
        w.field("MaxResults", self.max_results.as_ref())?;
        w.field("IncludeMarketplace", self.include_marketplace.as_ref())?;
        w.field("MinDuration", self.min_duration.as_ref())?;
        w.field("MaxDuration", self.max_duration.as_ref())?;
        w.field("MaxInstanceCount", self.max_instance_count.as_ref())?;
        w.finish()
    }
}

impl StableHash for DescribeReservedInstancesOfferingsRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.reserved_instances_offering_ids,
            &self.instance_type,
            &self.availability_zone,
            &self.product_description,
            &self.filters,
            &self.instance_tenancy,
            &self.offering_type,
            &self.next_token,
            &self.max_results,
            &self.include_marketplace,
            &self.min_duration,
            &self.max_duration,
            &self.max_instance_count,
        ])
    }
}

impl std::hash::Hash for DescribeReservedInstancesOfferingsRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
