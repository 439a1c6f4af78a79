// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{GroupIdentifier, Instance};

/// Reservation : A group of instances launched together.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Reservation {
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "Instances", skip_serializing_if = "Option::is_none")]
    instances: Option<Vec<Instance>>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "RequesterId", skip_serializing_if = "Option::is_none")]
    requester_id: Option<String>,
    #[serde(rename = "ReservationId", skip_serializing_if = "Option::is_none")]
    reservation_id: Option<String>,
}

impl Reservation {
    /// A group of instances launched together.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_groups(&mut self, groups: Vec<GroupIdentifier>) {
        self.groups = Some(groups);
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<GroupIdentifier>) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Appends one group; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_group(mut self, group: GroupIdentifier) -> Self {
        self.groups.get_or_insert_with(Vec::new).push(group);
        self
    }

    pub fn groups(&self) -> Option<&[GroupIdentifier]> {
        self.groups.as_deref()
    }

    pub fn reset_groups(&mut self) {
        self.groups = None;
    }

    pub fn set_instances(&mut self, instances: Vec<Instance>) {
        self.instances = Some(instances);
    }

    #[must_use]
    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = Some(instances);
        self
    }

    /// Appends one instance; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.get_or_insert_with(Vec::new).push(instance);
        self
    }

    pub fn instances(&self) -> Option<&[Instance]> {
        self.instances.as_deref()
    }

    pub fn reset_instances(&mut self) {
        self.instances = None;
    }

    pub fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = Some(owner_id);
    }

    #[must_use]
    pub fn with_owner_id(mut self, owner_id: String) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn reset_owner_id(&mut self) {
        self.owner_id = None;
    }

    pub fn set_requester_id(&mut self, requester_id: String) {
        self.requester_id = Some(requester_id);
    }

    #[must_use]
    pub fn with_requester_id(mut self, requester_id: String) -> Self {
        self.requester_id = Some(requester_id);
        self
    }

    pub fn requester_id(&self) -> Option<&str> {
        self.requester_id.as_deref()
    }

    pub fn reset_requester_id(&mut self) {
        self.requester_id = None;
    }

    pub fn set_reservation_id(&mut self, reservation_id: String) {
        self.reservation_id = Some(reservation_id);
    }

    #[must_use]
    pub fn with_reservation_id(mut self, reservation_id: String) -> Self {
        self.reservation_id = Some(reservation_id);
        self
    }

    pub fn reservation_id(&self) -> Option<&str> {
        self.reservation_id.as_deref()
    }

    pub fn reset_reservation_id(&mut self) {
        self.reservation_id = None;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("Groups", self.groups.as_deref())?;
        w.list("Instances", self.instances.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("RequesterId", self.requester_id.as_deref())?;
        w.field("ReservationId", self.reservation_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for Reservation {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.groups,
            &self.instances,
            &self.owner_id,
            &self.requester_id,
            &self.reservation_id,
        ])
    }
}

impl std::hash::Hash for Reservation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
