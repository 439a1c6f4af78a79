// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// IamInstanceProfileSpecification : An IAM instance profile reference, by ARN or by name.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IamInstanceProfileSpecification {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl IamInstanceProfileSpecification {
    /// An IAM instance profile reference, by ARN or by name.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_arn(&mut self, arn: String) {
        self.arn = Some(arn);
    }

    #[must_use]
    pub fn with_arn(mut self, arn: String) -> Self {
        self.arn = Some(arn);
        self
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn reset_arn(&mut self) {
        self.arn = None;
    }

    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reset_name(&mut self) {
        self.name = None;
    }
}

impl fmt::Display for IamInstanceProfileSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Arn", self.arn.as_deref())?;
        w.field("Name", self.name.as_deref())?;
        w.finish()
    }
}

impl StableHash for IamInstanceProfileSpecification {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.arn, &self.name])
    }
}

impl std::hash::Hash for IamInstanceProfileSpecification {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
