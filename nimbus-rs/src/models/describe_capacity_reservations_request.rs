// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Filter;

/// DescribeCapacityReservationsRequest : Parameters for listing capacity
/// reservations, scoped by IDs or filters.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DescribeCapacityReservationsRequest {
    #[serde(rename = "CapacityReservationIds", skip_serializing_if = "Option::is_none")]
    capacity_reservation_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
}

impl DescribeCapacityReservationsRequest {
    /// Parameters for listing capacity reservations, scoped by IDs or
    /// filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_capacity_reservation_ids(&mut self, capacity_reservation_ids: Vec<String>) {
        self.capacity_reservation_ids = Some(capacity_reservation_ids);
    }

    #[must_use]
    pub fn with_capacity_reservation_ids(mut self, capacity_reservation_ids: Vec<String>) -> Self {
        self.capacity_reservation_ids = Some(capacity_reservation_ids);
        self
    }

    /// Appends one capacity reservation id; the backing list is allocated on
    /// first use.
    #[must_use]
    pub fn with_capacity_reservation_id(mut self, capacity_reservation_id: String) -> Self {
        self.capacity_reservation_ids
            .get_or_insert_with(Vec::new)
            .push(capacity_reservation_id);
        self
    }

    pub fn capacity_reservation_ids(&self) -> Option<&[String]> {
        self.capacity_reservation_ids.as_deref()
    }

    pub fn reset_capacity_reservation_ids(&mut self) {
        self.capacity_reservation_ids = None;
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

impl fmt::Display for DescribeCapacityReservationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("CapacityReservationIds", self.capacity_reservation_ids.as_deref())?;
        w.field("NextToken", self.next_token.as_deref())?;
        w.field("MaxResults", self.max_results.as_ref())?;
        w.list("Filters", self.filters.as_deref())?;
        w.field("DryRun", self.dry_run.as_ref())?;
        w.finish()
    }
}

impl StableHash for DescribeCapacityReservationsRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.capacity_reservation_ids,
            &self.next_token,
            &self.max_results,
            &self.filters,
            &self.dry_run,
        ])
    }
}

impl std::hash::Hash for DescribeCapacityReservationsRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
