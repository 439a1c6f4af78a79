// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// GroupIdentifier : Describes a security group association.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GroupIdentifier {
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    group_id: Option<String>,
}

impl GroupIdentifier {
    /// Describes a security group association.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group_name(&mut self, group_name: String) {
        self.group_name = Some(group_name);
    }

    #[must_use]
    pub fn with_group_name(mut self, group_name: String) -> Self {
        self.group_name = Some(group_name);
        self
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn reset_group_name(&mut self) {
        self.group_name = None;
    }

    pub fn set_group_id(&mut self, group_id: String) {
        self.group_id = Some(group_id);
    }

    #[must_use]
    pub fn with_group_id(mut self, group_id: String) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn reset_group_id(&mut self) {
        self.group_id = None;
    }
}

impl fmt::Display for GroupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("GroupName", self.group_name.as_deref())?;
        w.field("GroupId", self.group_id.as_deref())?;
        w.finish()
    }
}

impl StableHash for GroupIdentifier {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.group_name, &self.group_id])
    }
}

impl std::hash::Hash for GroupIdentifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
