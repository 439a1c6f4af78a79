// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// InternetGatewayAttachment : The attachment of a VPC to an internet gateway.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InternetGatewayAttachment {
    /// Valid values: `attaching | attached | detaching | detached`.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
}

impl InternetGatewayAttachment {
    /// The attachment of a VPC to an internet gateway.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: String) {
        self.state = Some(state);
    }

    #[must_use]
    pub fn with_state(mut self, state: String) -> Self {
        self.state = Some(state);
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn reset_state(&mut self) {
        self.state = None;
    }

    pub fn set_vpc_id(&mut self, vpc_id: String) {
        self.vpc_id = Some(vpc_id);
    }

    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: String) -> Self {
        self.vpc_id = Some(vpc_id);
        self
    }

    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    pub fn reset_vpc_id(&mut self) {
        self.vpc_id = None;
    }
}

impl fmt::Display for InternetGatewayAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("State", self.state.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for InternetGatewayAttachment {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.state, &self.vpc_id])
    }
}

impl std::hash::Hash for InternetGatewayAttachment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
