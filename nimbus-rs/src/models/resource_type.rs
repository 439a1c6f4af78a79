// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

/// ResourceType : The resource kinds that accept tags at creation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ResourceType {
    DedicatedHost,
    Fleet,
    Image,
    Instance,
    InternetGateway,
    KeyPair,
    LaunchTemplate,
    Natgateway,
    NetworkInterface,
    PlacementGroup,
    ReservedInstances,
    RouteTable,
    SecurityGroup,
    Snapshot,
    SpotFleetRequest,
    SpotInstancesRequest,
    Subnet,
    Volume,
    Vpc,
    /// A literal this release does not know; the service grows the set
    /// without a client update.
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::DedicatedHost => "dedicated-host",
            Self::Fleet => "fleet",
            Self::Image => "image",
            Self::Instance => "instance",
            Self::InternetGateway => "internet-gateway",
            Self::KeyPair => "key-pair",
            Self::LaunchTemplate => "launch-template",
            Self::Natgateway => "natgateway",
            Self::NetworkInterface => "network-interface",
            Self::PlacementGroup => "placement-group",
            Self::ReservedInstances => "reserved-instances",
            Self::RouteTable => "route-table",
            Self::SecurityGroup => "security-group",
            Self::Snapshot => "snapshot",
            Self::SpotFleetRequest => "spot-fleet-request",
            Self::SpotInstancesRequest => "spot-instances-request",
            Self::Subnet => "subnet",
            Self::Volume => "volume",
            Self::Vpc => "vpc",
            Self::Other(literal) => literal,
        }
    }

    /// The literals known to this release.
    pub const fn values() -> &'static [&'static str] {
        &[
            "dedicated-host", "fleet", "image", "instance",
            "internet-gateway", "key-pair", "launch-template", "natgateway",
            "network-interface", "placement-group", "reserved-instances", "route-table",
            "security-group", "snapshot", "spot-fleet-request", "spot-instances-request",
            "subnet", "volume", "vpc",
        ]
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResourceType {
    fn from(value: &str) -> Self {
        match value {
            "dedicated-host" => Self::DedicatedHost,
            "fleet" => Self::Fleet,
            "image" => Self::Image,
            "instance" => Self::Instance,
            "internet-gateway" => Self::InternetGateway,
            "key-pair" => Self::KeyPair,
            "launch-template" => Self::LaunchTemplate,
            "natgateway" => Self::Natgateway,
            "network-interface" => Self::NetworkInterface,
            "placement-group" => Self::PlacementGroup,
            "reserved-instances" => Self::ReservedInstances,
            "route-table" => Self::RouteTable,
            "security-group" => Self::SecurityGroup,
            "snapshot" => Self::Snapshot,
            "spot-fleet-request" => Self::SpotFleetRequest,
            "spot-instances-request" => Self::SpotInstancesRequest,
            "subnet" => Self::Subnet,
            "volume" => Self::Volume,
            "vpc" => Self::Vpc,
            other => {
                log::trace!("unrecognized resource type literal {:?}", other);
                Self::Other(other.to_owned())
            }
        }
    }
}

impl From<String> for ResourceType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        match value {
            ResourceType::Other(literal) => literal,
            known => known.as_str().to_owned(),
        }
    }
}
