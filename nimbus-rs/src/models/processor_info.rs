// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// ProcessorInfo : Describes the processor used by an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProcessorInfo {
    /// Element values: `i386 | x86_64 | arm64`.
    #[serde(rename = "SupportedArchitectures", skip_serializing_if = "Option::is_none")]
    supported_architectures: Option<Vec<String>>,
    #[serde(rename = "SustainedClockSpeedInGhz", skip_serializing_if = "Option::is_none")]
    sustained_clock_speed_in_ghz: Option<String>,
}

impl ProcessorInfo {
    /// Describes the processor used by an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_supported_architectures(&mut self, supported_architectures: Vec<String>) {
        self.supported_architectures = Some(supported_architectures);
    }

    #[must_use]
    pub fn with_supported_architectures(mut self, supported_architectures: Vec<String>) -> Self {
        self.supported_architectures = Some(supported_architectures);
        self
    }

    /// Appends one supported architecture; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_supported_architecture(mut self, supported_architecture: String) -> Self {
        self.supported_architectures.get_or_insert_with(Vec::new).push(supported_architecture);
        self
    }

    pub fn supported_architectures(&self) -> Option<&[String]> {
        self.supported_architectures.as_deref()
    }

    pub fn reset_supported_architectures(&mut self) {
        self.supported_architectures = None;
    }

    pub fn set_sustained_clock_speed_in_ghz(&mut self, sustained_clock_speed_in_ghz: String) {
        self.sustained_clock_speed_in_ghz = Some(sustained_clock_speed_in_ghz);
    }

    #[must_use]
    pub fn with_sustained_clock_speed_in_ghz(
        mut self,
        sustained_clock_speed_in_ghz: String,
    ) -> Self {
        self.sustained_clock_speed_in_ghz = Some(sustained_clock_speed_in_ghz);
        self
    }

    pub fn sustained_clock_speed_in_ghz(&self) -> Option<&str> {
        self.sustained_clock_speed_in_ghz.as_deref()
    }

    pub fn reset_sustained_clock_speed_in_ghz(&mut self) {
        self.sustained_clock_speed_in_ghz = None;
    }
}

impl fmt::Display for ProcessorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("SupportedArchitectures", self.supported_architectures.as_deref())?;
        w.field("SustainedClockSpeedInGhz", self.sustained_clock_speed_in_ghz.as_deref())?;
        w.finish()
    }
}

impl StableHash for ProcessorInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.supported_architectures, &self.sustained_clock_speed_in_ghz])
    }
}

impl std::hash::Hash for ProcessorInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
