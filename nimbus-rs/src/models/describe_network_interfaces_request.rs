// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::Filter;

/// DescribeNetworkInterfacesRequest : Parameters for listing network
/// interfaces, scoped by IDs or filters.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DescribeNetworkInterfacesRequest {
    #[serde(rename = "NetworkInterfaceIds", skip_serializing_if = "Option::is_none")]
    network_interface_ids: Option<Vec<String>>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<Filter>>,
}

impl DescribeNetworkInterfacesRequest {
    /// Parameters for listing network interfaces, scoped by IDs or filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_network_interface_ids(&mut self, network_interface_ids: Vec<String>) {
        self.network_interface_ids = Some(network_interface_ids);
    }

    #[must_use]
    pub fn with_network_interface_ids(mut self, network_interface_ids: Vec<String>) -> Self {
        self.network_interface_ids = Some(network_interface_ids);
        self
    }

    /// Appends one network interface id; the backing list is allocated on
    /// first use.
    #[must_use]
    pub fn with_network_interface_id(mut self, network_interface_id: String) -> Self {
        self.network_interface_ids
            .get_or_insert_with(Vec::new)
            .push(network_interface_id);
        self
    }

    pub fn network_interface_ids(&self) -> Option<&[String]> {
        self.network_interface_ids.as_deref()
    }

    pub fn reset_network_interface_ids(&mut self) {
        self.network_interface_ids = None;
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
}

impl fmt::Display for DescribeNetworkInterfacesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("NetworkInterfaceIds", self.network_interface_ids.as_deref())?;
        w.list("Filters", self.filters.as_deref())?;
        w.finish()
    }
}

impl StableHash for DescribeNetworkInterfacesRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.network_interface_ids, &self.filters])
    }
}

impl std::hash::Hash for DescribeNetworkInterfacesRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
