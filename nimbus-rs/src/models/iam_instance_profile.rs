// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// IamInstanceProfile : Describes an IAM instance profile association.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IamInstanceProfile {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl IamInstanceProfile {
    /// Describes an IAM instance profile association.
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

    pub fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    #[must_use]
    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn reset_id(&mut self) {
        self.id = None;
    }
}

impl fmt::Display for IamInstanceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Arn", self.arn.as_deref())?;
        w.field("Id", self.id.as_deref())?;
        w.finish()
    }
}

impl StableHash for IamInstanceProfile {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.arn, &self.id])
    }
}

impl std::hash::Hash for IamInstanceProfile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
