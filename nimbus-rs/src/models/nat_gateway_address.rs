// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// NatGatewayAddress : The IP addresses and network interface associated with a NAT gateway.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NatGatewayAddress {
    #[serde(rename = "AllocationId", skip_serializing_if = "Option::is_none")]
    allocation_id: Option<String>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    network_interface_id: Option<String>,
    #[serde(rename = "PrivateIp", skip_serializing_if = "Option::is_none")]
    private_ip: Option<String>,
    #[serde(rename = "PublicIp", skip_serializing_if = "Option::is_none")]
    public_ip: Option<String>,
}

impl NatGatewayAddress {
    /// The IP addresses and network interface associated with a NAT gateway.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allocation_id(&mut self, allocation_id: String) {
        self.allocation_id = Some(allocation_id);
    }

    #[must_use]
    pub fn with_allocation_id(mut self, allocation_id: String) -> Self {
        self.allocation_id = Some(allocation_id);
        self
    }

    pub fn allocation_id(&self) -> Option<&str> {
        self.allocation_id.as_deref()
    }

    pub fn reset_allocation_id(&mut self) {
        self.allocation_id = None;
    }

    pub fn set_network_interface_id(&mut self, network_interface_id: String) {
        self.network_interface_id = Some(network_interface_id);
    }

    #[must_use]
    pub fn with_network_interface_id(mut self, network_interface_id: String) -> Self {
        self.network_interface_id = Some(network_interface_id);
        self
    }

    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }

    pub fn reset_network_interface_id(&mut self) {
        self.network_interface_id = None;
    }

    pub fn set_private_ip(&mut self, private_ip: String) {
        self.private_ip = Some(private_ip);
    }

    #[must_use]
    pub fn with_private_ip(mut self, private_ip: String) -> Self {
        self.private_ip = Some(private_ip);
        self
    }

    pub fn private_ip(&self) -> Option<&str> {
        self.private_ip.as_deref()
    }

    pub fn reset_private_ip(&mut self) {
        self.private_ip = None;
    }

    pub fn set_public_ip(&mut self, public_ip: String) {
        self.public_ip = Some(public_ip);
    }

    #[must_use]
    pub fn with_public_ip(mut self, public_ip: String) -> Self {
        self.public_ip = Some(public_ip);
        self
    }

    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref()
    }

    pub fn reset_public_ip(&mut self) {
        self.public_ip = None;
    }
}

impl fmt::Display for NatGatewayAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AllocationId", self.allocation_id.as_deref())?;
        w.field("NetworkInterfaceId", self.network_interface_id.as_deref())?;
        w.field("PrivateIp", self.private_ip.as_deref())?;
        w.field("PublicIp", self.public_ip.as_deref())?;
        w.finish()
    }
}

impl StableHash for NatGatewayAddress {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.allocation_id,
            &self.network_interface_id,
            &self.private_ip,
            &self.public_ip,
        ])
    }
}

impl std::hash::Hash for NatGatewayAddress {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
