// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Reservation;

/// DescribeInstancesResult : The reservations returned by a describe-instances call.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DescribeInstancesResult {
    #[serde(rename = "Reservations", skip_serializing_if = "Option::is_none")]
    reservations: Option<Vec<Reservation>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeInstancesResult {
    /// The reservations returned by a describe-instances call.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reservations(&mut self, reservations: Vec<Reservation>) {
        self.reservations = Some(reservations);
    }

    #[must_use]
    pub fn with_reservations(mut self, reservations: Vec<Reservation>) -> Self {
        self.reservations = Some(reservations);
        self
    }

    /// Appends one reservation; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_reservation(mut self, reservation: Reservation) -> Self {
        self.reservations.get_or_insert_with(Vec::new).push(reservation);
        self
    }

    pub fn reservations(&self) -> Option<&[Reservation]> {
        self.reservations.as_deref()
    }

    pub fn reset_reservations(&mut self) {
        self.reservations = None;
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
}

impl fmt::Display for DescribeInstancesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("Reservations", self.reservations.as_deref())?;
        w.field("NextToken", self.next_token.as_deref())?;
        w.finish()
    }
}

impl StableHash for DescribeInstancesResult {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.reservations, &self.next_token])
    }
}

impl std::hash::Hash for DescribeInstancesResult {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
