// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// CpuOptions : The CPU options for an instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CpuOptions {
    #[serde(rename = "CoreCount", skip_serializing_if = "Option::is_none")]
    core_count: Option<i32>,
    #[serde(rename = "ThreadsPerCore", skip_serializing_if = "Option::is_none")]
    threads_per_core: Option<i32>,
}

impl CpuOptions {
    /// The CPU options for an instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_core_count(&mut self, core_count: i32) {
        self.core_count = Some(core_count);
    }

    #[must_use]
    pub fn with_core_count(mut self, core_count: i32) -> Self {
        self.core_count = Some(core_count);
        self
    }

    pub fn core_count(&self) -> Option<i32> {
        self.core_count
    }

    pub fn reset_core_count(&mut self) {
        self.core_count = None;
    }

    pub fn set_threads_per_core(&mut self, threads_per_core: i32) {
        self.threads_per_core = Some(threads_per_core);
    }

    #[must_use]
    pub fn with_threads_per_core(mut self, threads_per_core: i32) -> Self {
        self.threads_per_core = Some(threads_per_core);
        self
    }

    pub fn threads_per_core(&self) -> Option<i32> {
        self.threads_per_core
    }

    pub fn reset_threads_per_core(&mut self) {
        self.threads_per_core = None;
    }
}

impl fmt::Display for CpuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("CoreCount", self.core_count.as_ref())?;
        w.field("ThreadsPerCore", self.threads_per_core.as_ref())?;
        w.finish()
    }
}

impl StableHash for CpuOptions {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.core_count, &self.threads_per_core])
    }
}

impl std::hash::Hash for CpuOptions {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
