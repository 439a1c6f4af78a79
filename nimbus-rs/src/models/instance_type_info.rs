// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{InstanceStorageInfo, MemoryInfo, NetworkInfo, ProcessorInfo, VCpuInfo};

/// InstanceTypeInfo : Describes the capabilities of an instance type.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InstanceTypeInfo {
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "CurrentGeneration", skip_serializing_if = "Option::is_none")]
    current_generation: Option<bool>,
    #[serde(rename = "FreeTierEligible", skip_serializing_if = "Option::is_none")]
    free_tier_eligible: Option<bool>,
    /// Element values: `spot | on-demand`.
    #[serde(rename = "SupportedUsageClasses", skip_serializing_if = "Option::is_none")]
    supported_usage_classes: Option<Vec<String>>,
    /// Element values: `ebs | instance-store`.
    #[serde(rename = "SupportedRootDeviceTypes", skip_serializing_if = "Option::is_none")]
    supported_root_device_types: Option<Vec<String>>,
    /// Element values: `hvm | paravirtual`.
    #[serde(rename = "SupportedVirtualizationTypes", skip_serializing_if = "Option::is_none")]
    supported_virtualization_types: Option<Vec<String>>,
    #[serde(rename = "BareMetal", skip_serializing_if = "Option::is_none")]
    bare_metal: Option<bool>,
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    hypervisor: Option<String>,
    #[serde(rename = "ProcessorInfo", skip_serializing_if = "Option::is_none")]
    processor_info: Option<ProcessorInfo>,
    #[serde(rename = "VCpuInfo", skip_serializing_if = "Option::is_none")]
    v_cpu_info: Option<VCpuInfo>,
    #[serde(rename = "MemoryInfo", skip_serializing_if = "Option::is_none")]
    memory_info: Option<MemoryInfo>,
    #[serde(rename = "InstanceStorageSupported", skip_serializing_if = "Option::is_none")]
    instance_storage_supported: Option<bool>,
    #[serde(rename = "InstanceStorageInfo", skip_serializing_if = "Option::is_none")]
    instance_storage_info: Option<InstanceStorageInfo>,
    #[serde(rename = "NetworkInfo", skip_serializing_if = "Option::is_none")]
    network_info: Option<NetworkInfo>,
    #[serde(rename = "HibernationSupported", skip_serializing_if = "Option::is_none")]
    hibernation_supported: Option<bool>,
    #[serde(rename = "BurstablePerformanceSupported", skip_serializing_if = "Option::is_none")]
    burstable_performance_supported: Option<bool>,
    #[serde(rename = "DedicatedHostsSupported", skip_serializing_if = "Option::is_none")]
    dedicated_hosts_supported: Option<bool>,
    #[serde(rename = "AutoRecoverySupported", skip_serializing_if = "Option::is_none")]
    auto_recovery_supported: Option<bool>,
}

impl InstanceTypeInfo {
    /// Describes the capabilities of an instance type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the literal string or a typed
    /// [`InstanceType`](crate::models::InstanceType) value.
    pub fn set_instance_type(&mut self, instance_type: impl Into<String>) {
        self.instance_type = Some(instance_type.into());
    }

    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn reset_instance_type(&mut self) {
        self.instance_type = None;
    }

    pub fn set_current_generation(&mut self, current_generation: bool) {
        self.current_generation = Some(current_generation);
    }

    #[must_use]
    pub fn with_current_generation(mut self, current_generation: bool) -> Self {
        self.current_generation = Some(current_generation);
        self
    }

    pub fn current_generation(&self) -> Option<bool> {
        self.current_generation
    }

    pub fn reset_current_generation(&mut self) {
        self.current_generation = None;
    }

    pub fn set_free_tier_eligible(&mut self, free_tier_eligible: bool) {
        self.free_tier_eligible = Some(free_tier_eligible);
    }

    #[must_use]
    pub fn with_free_tier_eligible(mut self, free_tier_eligible: bool) -> Self {
        self.free_tier_eligible = Some(free_tier_eligible);
        self
    }

    pub fn free_tier_eligible(&self) -> Option<bool> {
        self.free_tier_eligible
    }

    pub fn reset_free_tier_eligible(&mut self) {
        self.free_tier_eligible = None;
    }

    pub fn set_supported_usage_classes(&mut self, supported_usage_classes: Vec<String>) {
        self.supported_usage_classes = Some(supported_usage_classes);
    }

    #[must_use]
    pub fn with_supported_usage_classes(mut self, supported_usage_classes: Vec<String>) -> Self {
        self.supported_usage_classes = Some(supported_usage_classes);
        self
    }

    /// Appends one supported usage class; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_supported_usage_class(mut self, supported_usage_class: String) -> Self {
        self.supported_usage_classes.get_or_insert_with(Vec::new).push(supported_usage_class);
        self
    }

    pub fn supported_usage_classes(&self) -> Option<&[String]> {
        self.supported_usage_classes.as_deref()
    }

    pub fn reset_supported_usage_classes(&mut self) {
        self.supported_usage_classes = None;
    }

    pub fn set_supported_root_device_types(&mut self, supported_root_device_types: Vec<String>) {
        self.supported_root_device_types = Some(supported_root_device_types);
    }

    #[must_use]
    pub fn with_supported_root_device_types(
        mut self,
        supported_root_device_types: Vec<String>,
    ) -> Self {
        self.supported_root_device_types = Some(supported_root_device_types);
        self
    }

    /// Appends one supported root device type; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_supported_root_device_type(mut self, supported_root_device_type: String) -> Self {
        self.supported_root_device_types
            .get_or_insert_with(Vec::new)
            .push(supported_root_device_type);
        self
    }

    pub fn supported_root_device_types(&self) -> Option<&[String]> {
        self.supported_root_device_types.as_deref()
    }

    pub fn reset_supported_root_device_types(&mut self) {
        self.supported_root_device_types = None;
    }

    pub fn set_supported_virtualization_types(
        &mut self,
        supported_virtualization_types: Vec<String>,
    ) {
        self.supported_virtualization_types = Some(supported_virtualization_types);
    }

    #[must_use]
    pub fn with_supported_virtualization_types(
        mut self,
        supported_virtualization_types: Vec<String>,
    ) -> Self {
        self.supported_virtualization_types = Some(supported_virtualization_types);
        self
    }

    /// Appends one supported virtualization type; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_supported_virtualization_type(
        mut self,
        supported_virtualization_type: String,
    ) -> Self {
        self.supported_virtualization_types
            .get_or_insert_with(Vec::new)
            .push(supported_virtualization_type);
        self
    }

    pub fn supported_virtualization_types(&self) -> Option<&[String]> {
        self.supported_virtualization_types.as_deref()
    }

    pub fn reset_supported_virtualization_types(&mut self) {
        self.supported_virtualization_types = None;
    }

    pub fn set_bare_metal(&mut self, bare_metal: bool) {
        self.bare_metal = Some(bare_metal);
    }

    #[must_use]
    pub fn with_bare_metal(mut self, bare_metal: bool) -> Self {
        self.bare_metal = Some(bare_metal);
        self
    }

    pub fn bare_metal(&self) -> Option<bool> {
        self.bare_metal
    }

    pub fn reset_bare_metal(&mut self) {
        self.bare_metal = None;
    }

    pub fn set_hypervisor(&mut self, hypervisor: String) {
        self.hypervisor = Some(hypervisor);
    }

    #[must_use]
    pub fn with_hypervisor(mut self, hypervisor: String) -> Self {
        self.hypervisor = Some(hypervisor);
        self
    }

    pub fn hypervisor(&self) -> Option<&str> {
        self.hypervisor.as_deref()
    }

    pub fn reset_hypervisor(&mut self) {
        self.hypervisor = None;
    }

    pub fn set_processor_info(&mut self, processor_info: ProcessorInfo) {
        self.processor_info = Some(processor_info);
    }

    #[must_use]
    pub fn with_processor_info(mut self, processor_info: ProcessorInfo) -> Self {
        self.processor_info = Some(processor_info);
        self
    }

    pub fn processor_info(&self) -> Option<&ProcessorInfo> {
        self.processor_info.as_ref()
    }

    pub fn reset_processor_info(&mut self) {
        self.processor_info = None;
    }

    pub fn set_v_cpu_info(&mut self, v_cpu_info: VCpuInfo) {
        self.v_cpu_info = Some(v_cpu_info);
    }

    #[must_use]
    pub fn with_v_cpu_info(mut self, v_cpu_info: VCpuInfo) -> Self {
        self.v_cpu_info = Some(v_cpu_info);
        self
    }

    pub fn v_cpu_info(&self) -> Option<&VCpuInfo> {
        self.v_cpu_info.as_ref()
    }

    pub fn reset_v_cpu_info(&mut self) {
        self.v_cpu_info = None;
    }

    pub fn set_memory_info(&mut self, memory_info: MemoryInfo) {
        self.memory_info = Some(memory_info);
    }

    #[must_use]
    pub fn with_memory_info(mut self, memory_info: MemoryInfo) -> Self {
        self.memory_info = Some(memory_info);
        self
    }

    pub fn memory_info(&self) -> Option<&MemoryInfo> {
        self.memory_info.as_ref()
    }

    pub fn reset_memory_info(&mut self) {
        self.memory_info = None;
    }

    pub fn set_instance_storage_supported(&mut self, instance_storage_supported: bool) {
        self.instance_storage_supported = Some(instance_storage_supported);
    }

    #[must_use]
    pub fn with_instance_storage_supported(mut self, instance_storage_supported: bool) -> Self {
        self.instance_storage_supported = Some(instance_storage_supported);
        self
    }

    pub fn instance_storage_supported(&self) -> Option<bool> {
        self.instance_storage_supported
    }

    pub fn reset_instance_storage_supported(&mut self) {
        self.instance_storage_supported = None;
    }

    pub fn set_instance_storage_info(&mut self, instance_storage_info: InstanceStorageInfo) {
        self.instance_storage_info = Some(instance_storage_info);
    }

    #[must_use]
    pub fn with_instance_storage_info(
        mut self,
        instance_storage_info: InstanceStorageInfo,
    ) -> Self {
        self.instance_storage_info = Some(instance_storage_info);
        self
    }

    pub fn instance_storage_info(&self) -> Option<&InstanceStorageInfo> {
        self.instance_storage_info.as_ref()
    }

    pub fn reset_instance_storage_info(&mut self) {
        self.instance_storage_info = None;
    }

    pub fn set_network_info(&mut self, network_info: NetworkInfo) {
        self.network_info = Some(network_info);
    }

    #[must_use]
    pub fn with_network_info(mut self, network_info: NetworkInfo) -> Self {
        self.network_info = Some(network_info);
        self
    }

    pub fn network_info(&self) -> Option<&NetworkInfo> {
        self.network_info.as_ref()
    }

    pub fn reset_network_info(&mut self) {
        self.network_info = None;
    }

    pub fn set_hibernation_supported(&mut self, hibernation_supported: bool) {
        self.hibernation_supported = Some(hibernation_supported);
    }

    #[must_use]
    pub fn with_hibernation_supported(mut self, hibernation_supported: bool) -> Self {
        self.hibernation_supported = Some(hibernation_supported);
        self
    }

    pub fn hibernation_supported(&self) -> Option<bool> {
        self.hibernation_supported
    }

    pub fn reset_hibernation_supported(&mut self) {
        self.hibernation_supported = None;
    }

    pub fn set_burstable_performance_supported(&mut self, burstable_performance_supported: bool) {
        self.burstable_performance_supported = Some(burstable_performance_supported);
    }

    #[must_use]
    pub fn with_burstable_performance_supported(
        mut self,
        burstable_performance_supported: bool,
    ) -> Self {
        self.burstable_performance_supported = Some(burstable_performance_supported);
        self
    }

    pub fn burstable_performance_supported(&self) -> Option<bool> {
        self.burstable_performance_supported
    }

    pub fn reset_burstable_performance_supported(&mut self) {
        self.burstable_performance_supported = None;
    }

    pub fn set_dedicated_hosts_supported(&mut self, dedicated_hosts_supported: bool) {
        self.dedicated_hosts_supported = Some(dedicated_hosts_supported);
    }

    #[must_use]
    pub fn with_dedicated_hosts_supported(mut self, dedicated_hosts_supported: bool) -> Self {
        self.dedicated_hosts_supported = Some(dedicated_hosts_supported);
        self
    }

    pub fn dedicated_hosts_supported(&self) -> Option<bool> {
        self.dedicated_hosts_supported
    }

    pub fn reset_dedicated_hosts_supported(&mut self) {
        self.dedicated_hosts_supported = None;
    }

    pub fn set_auto_recovery_supported(&mut self, auto_recovery_supported: bool) {
        self.auto_recovery_supported = Some(auto_recovery_supported);
    }

    #[must_use]
    pub fn with_auto_recovery_supported(mut self, auto_recovery_supported: bool) -> Self {
        self.auto_recovery_supported = Some(auto_recovery_supported);
        self
    }

    pub fn auto_recovery_supported(&self) -> Option<bool> {
        self.auto_recovery_supported
    }

    pub fn reset_auto_recovery_supported(&mut self) {
        self.auto_recovery_supported = None;
    }
}

impl fmt::Display for InstanceTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("InstanceType", self.instance_type.as_deref())?;
        w.field("CurrentGeneration", self.current_generation.as_ref())?;
        w.field("FreeTierEligible", self.free_tier_eligible.as_ref())?;
        w.list("SupportedUsageClasses", self.supported_usage_classes.as_deref())?;
        w.list("SupportedRootDeviceTypes", self.supported_root_device_types.as_deref())?;
        w.list("SupportedVirtualizationTypes", self.supported_virtualization_types.as_deref())?;
        w.field("BareMetal", self.bare_metal.as_ref())?;
        w.field("Hypervisor", self.hypervisor.as_deref())?;
        w.field("ProcessorInfo", self.processor_info.as_ref())?;
        w.field("VCpuInfo", self.v_cpu_info.as_ref())?;
        w.field("MemoryInfo", self.memory_info.as_ref())?;
        w.field("InstanceStorageSupported", self.instance_storage_supported.as_ref())?;
        w.field("InstanceStorageInfo", self.instance_storage_info.as_ref())?;
        w.field("NetworkInfo", self.network_info.as_ref())?;
        w.field("HibernationSupported", self.hibernation_supported.as_ref())?;
        w.field("BurstablePerformanceSupported", self.burstable_performance_supported.as_ref())?;
        w.field("DedicatedHostsSupported", self.dedicated_hosts_supported.as_ref())?;
        w.field("AutoRecoverySupported", self.auto_recovery_supported.as_ref())?;
        w.finish()
    }
}

impl StableHash for InstanceTypeInfo {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.instance_type,
            &self.current_generation,
            &self.free_tier_eligible,
            &self.supported_usage_classes,
            &self.supported_root_device_types,
            &self.supported_virtualization_types,
            &self.bare_metal,
            &self.hypervisor,
            &self.processor_info,
            &self.v_cpu_info,
            &self.memory_info,
            &self.instance_storage_supported,
            &self.instance_storage_info,
            &self.network_info,
            &self.hibernation_supported,
            &self.burstable_performance_supported,
            &self.dedicated_hosts_supported,
            &self.auto_recovery_supported,
        ])
    }
}

impl std::hash::Hash for InstanceTypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
