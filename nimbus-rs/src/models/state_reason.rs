// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// StateReason : Describes the reason a resource entered its current state.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct StateReason {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl StateReason {
    /// Describes the reason a resource entered its current state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(&mut self, code: String) {
        self.code = Some(code);
    }

    #[must_use]
    pub fn with_code(mut self, code: String) -> Self {
        self.code = Some(code);
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn reset_code(&mut self) {
        self.code = None;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    #[must_use]
    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn reset_message(&mut self) {
        self.message = None;
    }
}

impl fmt::Display for StateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Code", self.code.as_deref())?;
        w.field("Message", self.message.as_deref())?;
        w.finish()
    }
}

impl StableHash for StateReason {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.code, &self.message])
    }
}

impl std::hash::Hash for StateReason {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
