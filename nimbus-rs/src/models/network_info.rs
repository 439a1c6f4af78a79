// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// NetworkInfo : Describes the networking capabilities of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NetworkInfo {
    #[serde(rename = "NetworkPerformance", skip_serializing_if = "Option::is_none")]
    network_performance: Option<String>,
    #[serde(rename = "MaximumNetworkInterfaces", skip_serializing_if = "Option::is_none")]
    maximum_network_interfaces: Option<i32>,
    #[serde(rename = "Ipv4AddressesPerInterface", skip_serializing_if = "Option::is_none")]
    ipv4_addresses_per_interface: Option<i32>,
    #[serde(rename = "Ipv6AddressesPerInterface", skip_serializing_if = "Option::is_none")]
    ipv6_addresses_per_interface: Option<i32>,
    #[serde(rename = "Ipv6Supported", skip_serializing_if = "Option::is_none")]
    ipv6_supported: Option<bool>,
    /// Valid values: `unsupported | supported | required`.
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    ena_support: Option<String>,
}

impl NetworkInfo {
    /// Describes the networking capabilities of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_network_performance(&mut self, network_performance: String) {
        self.network_performance = Some(network_performance);
    }

    #[must_use]
    pub fn with_network_performance(mut self, network_performance: String) -> Self {
        self.network_performance = Some(network_performance);
        self
    }

    pub fn network_performance(&self) -> Option<&str> {
        self.network_performance.as_deref()
    }

    pub fn reset_network_performance(&mut self) {
        self.network_performance = None;
    }

    pub fn set_maximum_network_interfaces(&mut self, maximum_network_interfaces: i32) {
        self.maximum_network_interfaces = Some(maximum_network_interfaces);
    }

    #[must_use]
    pub fn with_maximum_network_interfaces(mut self, maximum_network_interfaces: i32) -> Self {
        self.maximum_network_interfaces = Some(maximum_network_interfaces);
        self
    }

    pub fn maximum_network_interfaces(&self) -> Option<i32> {
        self.maximum_network_interfaces
    }

    pub fn reset_maximum_network_interfaces(&mut self) {
        self.maximum_network_interfaces = None;
    }

    pub fn set_ipv4_addresses_per_interface(&mut self, ipv4_addresses_per_interface: i32) {
        self.ipv4_addresses_per_interface = Some(ipv4_addresses_per_interface);
    }

    #[must_use]
    pub fn with_ipv4_addresses_per_interface(mut self, ipv4_addresses_per_interface: i32) -> Self {
        self.ipv4_addresses_per_interface = Some(ipv4_addresses_per_interface);
        self
    }

    pub fn ipv4_addresses_per_interface(&self) -> Option<i32> {
        self.ipv4_addresses_per_interface
    }

    pub fn reset_ipv4_addresses_per_interface(&mut self) {
        self.ipv4_addresses_per_interface = None;
    }

    pub fn set_ipv6_addresses_per_interface(&mut self, ipv6_addresses_per_interface: i32) {
        self.ipv6_addresses_per_interface = Some(ipv6_addresses_per_interface);
    }

    #[must_use]
    pub fn with_ipv6_addresses_per_interface(mut self, ipv6_addresses_per_interface: i32) -> Self {
        self.ipv6_addresses_per_interface = Some(ipv6_addresses_per_interface);
        self
    }

    pub fn ipv6_addresses_per_interface(&self) -> Option<i32> {
        self.ipv6_addresses_per_interface
    }

    pub fn reset_ipv6_addresses_per_interface(&mut self) {
        self.ipv6_addresses_per_interface = None;
    }

    pub fn set_ipv6_supported(&mut self, ipv6_supported: bool) {
        self.ipv6_supported = Some(ipv6_supported);
    }

    #[must_use]
    pub fn with_ipv6_supported(mut self, ipv6_supported: bool) -> Self {
        self.ipv6_supported = Some(ipv6_supported);
        self
    }

    pub fn ipv6_supported(&self) -> Option<bool> {
        self.ipv6_supported
    }

    pub fn reset_ipv6_supported(&mut self) {
        self.ipv6_supported = None;
    }

    pub fn set_ena_support(&mut self, ena_support: String) {
        self.ena_support = Some(ena_support);
    }

    #[must_use]
    pub fn with_ena_support(mut self, ena_support: String) -> Self {
        self.ena_support = Some(ena_support);
        self
    }

    pub fn ena_support(&self) -> Option<&str> {
        self.ena_support.as_deref()
    }

    pub fn reset_ena_support(&mut self) {
        self.ena_support = None;
    }
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("NetworkPerformance", self.network_performance.as_deref())?;
        w.field("MaximumNetworkInterfaces", self.maximum_network_interfaces.as_ref())?;
        w.field("Ipv4AddressesPerInterface", self.ipv4_addresses_per_interface.as_ref())?;
        w.field("Ipv6AddressesPerInterface", self.ipv6_addresses_per_interface.as_ref())?;
        w.field("Ipv6Supported", self.ipv6_supported.as_ref())?;
        w.field("EnaSupport", self.ena_support.as_deref())?;
        w.finish()
    }
}

impl StableHash for NetworkInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.network_performance,
            &self.maximum_network_interfaces,
            &self.ipv4_addresses_per_interface,
            &self.ipv6_addresses_per_interface,
            &self.ipv6_supported,
            &self.ena_support,
        ])
    }
}

impl std::hash::Hash for NetworkInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
