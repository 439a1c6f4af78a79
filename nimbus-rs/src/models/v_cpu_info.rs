// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// VCpuInfo : Describes the vCPU configurations of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct VCpuInfo {
    #[serde(rename = "DefaultVCpus", skip_serializing_if = "Option::is_none")]
    default_v_cpus: Option<i32>,
    #[serde(rename = "DefaultCores", skip_serializing_if = "Option::is_none")]
    default_cores: Option<i32>,
    #[serde(rename = "DefaultThreadsPerCore", skip_serializing_if = "Option::is_none")]
    default_threads_per_core: Option<i32>,
    #[serde(rename = "ValidCores", skip_serializing_if = "Option::is_none")]
    valid_cores: Option<Vec<i32>>,
    #[serde(rename = "ValidThreadsPerCore", skip_serializing_if = "Option::is_none")]
    valid_threads_per_core: Option<Vec<i32>>,
}

impl VCpuInfo {
    /// Describes the vCPU configurations of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_v_cpus(&mut self, default_v_cpus: i32) {
        self.default_v_cpus = Some(default_v_cpus);
    }

    #[must_use]
    pub fn with_default_v_cpus(mut self, default_v_cpus: i32) -> Self {
        self.default_v_cpus = Some(default_v_cpus);
        self
    }

    pub fn default_v_cpus(&self) -> Option<i32> {
        self.default_v_cpus
    }

    pub fn reset_default_v_cpus(&mut self) {
        self.default_v_cpus = None;
    }

    pub fn set_default_cores(&mut self, default_cores: i32) {
        self.default_cores = Some(default_cores);
    }

    #[must_use]
    pub fn with_default_cores(mut self, default_cores: i32) -> Self {
        self.default_cores = Some(default_cores);
        self
    }

    pub fn default_cores(&self) -> Option<i32> {
        self.default_cores
    }

    pub fn reset_default_cores(&mut self) {
        self.default_cores = None;
    }

    pub fn set_default_threads_per_core(&mut self, default_threads_per_core: i32) {
        self.default_threads_per_core = Some(default_threads_per_core);
    }

    #[must_use]
    pub fn with_default_threads_per_core(mut self, default_threads_per_core: i32) -> Self {
        self.default_threads_per_core = Some(default_threads_per_core);
        self
    }

    pub fn default_threads_per_core(&self) -> Option<i32> {
        self.default_threads_per_core
    }

    pub fn reset_default_threads_per_core(&mut self) {
        self.default_threads_per_core = None;
    }

    pub fn set_valid_cores(&mut self, valid_cores: Vec<i32>) {
        self.valid_cores = Some(valid_cores);
    }

    #[must_use]
    pub fn with_valid_cores(mut self, valid_cores: Vec<i32>) -> Self {
        self.valid_cores = Some(valid_cores);
        self
    }

    /// Appends one valid core count; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_valid_core_count(mut self, valid_core_count: i32) -> Self {
        self.valid_cores.get_or_insert_with(Vec::new).push(valid_core_count);
        self
    }

    pub fn valid_cores(&self) -> Option<&[i32]> {
        self.valid_cores.as_deref()
    }

    pub fn reset_valid_cores(&mut self) {
        self.valid_cores = None;
    }

    pub fn set_valid_threads_per_core(&mut self, valid_threads_per_core: Vec<i32>) {
        self.valid_threads_per_core = Some(valid_threads_per_core);
    }

    #[must_use]
    pub fn with_valid_threads_per_core(mut self, valid_threads_per_core: Vec<i32>) -> Self {
        self.valid_threads_per_core = Some(valid_threads_per_core);
        self
    }

    /// Appends one valid thread count; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_valid_thread_count(mut self, valid_thread_count: i32) -> Self {
        self.valid_threads_per_core.get_or_insert_with(Vec::new).push(valid_thread_count);
        self
    }

    pub fn valid_threads_per_core(&self) -> Option<&[i32]> {
        self.valid_threads_per_core.as_deref()
    }

    pub fn reset_valid_threads_per_core(&mut self) {
        self.valid_threads_per_core = None;
    }
}

impl fmt::Display for VCpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DefaultVCpus", self.default_v_cpus.as_ref())?;
        w.field("DefaultCores", self.default_cores.as_ref())?;
        w.field("DefaultThreadsPerCore", self.default_threads_per_core.as_ref())?;
        w.list("ValidCores", self.valid_cores.as_deref())?;
        w.list("ValidThreadsPerCore", self.valid_threads_per_core.as_deref())?;
        w.finish()
    }
}

impl StableHash for VCpuInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.default_v_cpus,
            &self.default_cores,
            &self.default_threads_per_core,
            &self.valid_cores,
            &self.valid_threads_per_core,
        ])
    }
}

impl std::hash::Hash for VCpuInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
