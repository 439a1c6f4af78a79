// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{
    BlockDeviceMapping, CpuOptions, HibernationOptions, IamInstanceProfileSpecification, Placement,
    RunInstancesMonitoringEnabled, TagSpecification,
};

/// RunInstancesRequest : Parameters for launching instances from a machine image.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RunInstancesRequest {
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    key_name: Option<String>,
    #[serde(rename = "MaxCount", skip_serializing_if = "Option::is_none")]
    max_count: Option<i32>,
    #[serde(rename = "MinCount", skip_serializing_if = "Option::is_none")]
    min_count: Option<i32>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    monitoring: Option<RunInstancesMonitoringEnabled>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    ramdisk_id: Option<String>,
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    security_group_ids: Option<Vec<String>>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    security_groups: Option<Vec<String>>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    user_data: Option<String>,
    #[serde(rename = "AdditionalInfo", skip_serializing_if = "Option::is_none")]
    additional_info: Option<String>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    #[serde(rename = "DisableApiTermination", skip_serializing_if = "Option::is_none")]
    disable_api_termination: Option<bool>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    iam_instance_profile: Option<IamInstanceProfileSpecification>,
    /// Valid values: `stop | terminate`.
    #[serde(rename = "InstanceInitiatedShutdownBehavior", skip_serializing_if = "Option::is_none")]
    instance_initiated_shutdown_behavior: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    private_ip_address: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    cpu_options: Option<CpuOptions>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    hibernation_options: Option<HibernationOptions>,
}

impl RunInstancesRequest {
    /// Parameters for launching instances from a machine image.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_block_device_mappings(&mut self, block_device_mappings: Vec<BlockDeviceMapping>) {
        self.block_device_mappings = Some(block_device_mappings);
    }

    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: Vec<BlockDeviceMapping>,
    ) -> Self {
        self.block_device_mappings = Some(block_device_mappings);
        self
    }

    /// Appends one block device mapping; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_block_device_mapping(mut self, block_device_mapping: BlockDeviceMapping) -> Self {
        self.block_device_mappings.get_or_insert_with(Vec::new).push(block_device_mapping);
        self
    }

    pub fn block_device_mappings(&self) -> Option<&[BlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    pub fn reset_block_device_mappings(&mut self) {
        self.block_device_mappings = None;
    }

    pub fn set_image_id(&mut self, image_id: String) {
        self.image_id = Some(image_id);
    }

    #[must_use]
    pub fn with_image_id(mut self, image_id: String) -> Self {
        self.image_id = Some(image_id);
        self
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn reset_image_id(&mut self) {
        self.image_id = None;
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

    pub fn set_kernel_id(&mut self, kernel_id: String) {
        self.kernel_id = Some(kernel_id);
    }

    #[must_use]
    pub fn with_kernel_id(mut self, kernel_id: String) -> Self {
        self.kernel_id = Some(kernel_id);
        self
    }

    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    pub fn reset_kernel_id(&mut self) {
        self.kernel_id = None;
    }

    pub fn set_key_name(&mut self, key_name: String) {
        self.key_name = Some(key_name);
    }

    #[must_use]
    pub fn with_key_name(mut self, key_name: String) -> Self {
        self.key_name = Some(key_name);
        self
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    pub fn reset_key_name(&mut self) {
        self.key_name = None;
    }

    pub fn set_max_count(&mut self, max_count: i32) {
        self.max_count = Some(max_count);
    }

    #[must_use]
    pub fn with_max_count(mut self, max_count: i32) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn max_count(&self) -> Option<i32> {
        self.max_count
    }

    pub fn reset_max_count(&mut self) {
        self.max_count = None;
    }

    pub fn set_min_count(&mut self, min_count: i32) {
        self.min_count = Some(min_count);
    }

    #[must_use]
    pub fn with_min_count(mut self, min_count: i32) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn min_count(&self) -> Option<i32> {
        self.min_count
    }

    pub fn reset_min_count(&mut self) {
        self.min_count = None;
    }

    pub fn set_monitoring(&mut self, monitoring: RunInstancesMonitoringEnabled) {
        self.monitoring = Some(monitoring);
    }

    #[must_use]
    pub fn with_monitoring(mut self, monitoring: RunInstancesMonitoringEnabled) -> Self {
        self.monitoring = Some(monitoring);
        self
    }

    pub fn monitoring(&self) -> Option<&RunInstancesMonitoringEnabled> {
        self.monitoring.as_ref()
    }

    pub fn reset_monitoring(&mut self) {
        self.monitoring = None;
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn reset_placement(&mut self) {
        self.placement = None;
    }

    pub fn set_ramdisk_id(&mut self, ramdisk_id: String) {
        self.ramdisk_id = Some(ramdisk_id);
    }

    #[must_use]
    pub fn with_ramdisk_id(mut self, ramdisk_id: String) -> Self {
        self.ramdisk_id = Some(ramdisk_id);
        self
    }

    pub fn ramdisk_id(&self) -> Option<&str> {
        self.ramdisk_id.as_deref()
    }

    pub fn reset_ramdisk_id(&mut self) {
        self.ramdisk_id = None;
    }

    pub fn set_security_group_ids(&mut self, security_group_ids: Vec<String>) {
        self.security_group_ids = Some(security_group_ids);
    }

    #[must_use]
    pub fn with_security_group_ids(mut self, security_group_ids: Vec<String>) -> Self {
        self.security_group_ids = Some(security_group_ids);
        self
    }

    /// Appends one security group id; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_security_group_id(mut self, security_group_id: String) -> Self {
        self.security_group_ids.get_or_insert_with(Vec::new).push(security_group_id);
        self
    }

    pub fn security_group_ids(&self) -> Option<&[String]> {
        self.security_group_ids.as_deref()
    }

    pub fn reset_security_group_ids(&mut self) {
        self.security_group_ids = None;
    }

    pub fn set_security_groups(&mut self, security_groups: Vec<String>) {
        self.security_groups = Some(security_groups);
    }

    #[must_use]
    pub fn with_security_groups(mut self, security_groups: Vec<String>) -> Self {
        self.security_groups = Some(security_groups);
        self
    }

    /// Appends one security group; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_security_group(mut self, security_group: String) -> Self {
        self.security_groups.get_or_insert_with(Vec::new).push(security_group);
        self
    }

    pub fn security_groups(&self) -> Option<&[String]> {
        self.security_groups.as_deref()
    }

    pub fn reset_security_groups(&mut self) {
        self.security_groups = None;
    }

    pub fn set_subnet_id(&mut self, subnet_id: String) {
        self.subnet_id = Some(subnet_id);
    }

    #[must_use]
    pub fn with_subnet_id(mut self, subnet_id: String) -> Self {
        self.subnet_id = Some(subnet_id);
        self
    }

    pub fn subnet_id(&self) -> Option<&str> {
        self.subnet_id.as_deref()
    }

    pub fn reset_subnet_id(&mut self) {
        self.subnet_id = None;
    }

    pub fn set_user_data(&mut self, user_data: String) {
        self.user_data = Some(user_data);
    }

    #[must_use]
    pub fn with_user_data(mut self, user_data: String) -> Self {
        self.user_data = Some(user_data);
        self
    }

    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    pub fn reset_user_data(&mut self) {
        self.user_data = None;
    }

    pub fn set_additional_info(&mut self, additional_info: String) {
        self.additional_info = Some(additional_info);
    }

    #[must_use]
    pub fn with_additional_info(mut self, additional_info: String) -> Self {
        self.additional_info = Some(additional_info);
        self
    }

    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    pub fn reset_additional_info(&mut self) {
        self.additional_info = None;
    }

    pub fn set_client_token(&mut self, client_token: String) {
        self.client_token = Some(client_token);
    }

    #[must_use]
    pub fn with_client_token(mut self, client_token: String) -> Self {
        self.client_token = Some(client_token);
        self
    }

    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }

    pub fn reset_client_token(&mut self) {
        self.client_token = None;
    }

    pub fn set_disable_api_termination(&mut self, disable_api_termination: bool) {
        self.disable_api_termination = Some(disable_api_termination);
    }

    #[must_use]
    pub fn with_disable_api_termination(mut self, disable_api_termination: bool) -> Self {
        self.disable_api_termination = Some(disable_api_termination);
        self
    }

    pub fn disable_api_termination(&self) -> Option<bool> {
        self.disable_api_termination
    }

    pub fn reset_disable_api_termination(&mut self) {
        self.disable_api_termination = None;
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = Some(dry_run);
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn dry_run(&self) -> Option<bool> {
        self.dry_run
    }

    pub fn reset_dry_run(&mut self) {
        self.dry_run = None;
    }

    pub fn set_ebs_optimized(&mut self, ebs_optimized: bool) {
        self.ebs_optimized = Some(ebs_optimized);
    }

    #[must_use]
    pub fn with_ebs_optimized(mut self, ebs_optimized: bool) -> Self {
        self.ebs_optimized = Some(ebs_optimized);
        self
    }

    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    pub fn reset_ebs_optimized(&mut self) {
        self.ebs_optimized = None;
    }

    pub fn set_iam_instance_profile(
        &mut self,
        iam_instance_profile: IamInstanceProfileSpecification,
    ) {
        self.iam_instance_profile = Some(iam_instance_profile);
    }

    #[must_use]
    pub fn with_iam_instance_profile(
        mut self,
        iam_instance_profile: IamInstanceProfileSpecification,
    ) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile);
        self
    }

    pub fn iam_instance_profile(&self) -> Option<&IamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    pub fn reset_iam_instance_profile(&mut self) {
        self.iam_instance_profile = None;
    }

    pub fn set_instance_initiated_shutdown_behavior(
        &mut self,
        instance_initiated_shutdown_behavior: String,
    ) {
        self.instance_initiated_shutdown_behavior = Some(instance_initiated_shutdown_behavior);
    }

    #[must_use]
    pub fn with_instance_initiated_shutdown_behavior(
        mut self,
        instance_initiated_shutdown_behavior: String,
    ) -> Self {
        self.instance_initiated_shutdown_behavior = Some(instance_initiated_shutdown_behavior);
        self
    }

    pub fn instance_initiated_shutdown_behavior(&self) -> Option<&str> {
        self.instance_initiated_shutdown_behavior.as_deref()
    }

    pub fn reset_instance_initiated_shutdown_behavior(&mut self) {
        self.instance_initiated_shutdown_behavior = None;
    }

    pub fn set_private_ip_address(&mut self, private_ip_address: String) {
        self.private_ip_address = Some(private_ip_address);
    }

    #[must_use]
    pub fn with_private_ip_address(mut self, private_ip_address: String) -> Self {
        self.private_ip_address = Some(private_ip_address);
        self
    }

    pub fn private_ip_address(&self) -> Option<&str> {
        self.private_ip_address.as_deref()
    }

    pub fn reset_private_ip_address(&mut self) {
        self.private_ip_address = None;
    }

    pub fn set_tag_specifications(&mut self, tag_specifications: Vec<TagSpecification>) {
        self.tag_specifications = Some(tag_specifications);
    }

    #[must_use]
    pub fn with_tag_specifications(mut self, tag_specifications: Vec<TagSpecification>) -> Self {
        self.tag_specifications = Some(tag_specifications);
        self
    }

    /// Appends one tag specification; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_tag_specification(mut self, tag_specification: TagSpecification) -> Self {
        self.tag_specifications.get_or_insert_with(Vec::new).push(tag_specification);
        self
    }

    pub fn tag_specifications(&self) -> Option<&[TagSpecification]> {
        self.tag_specifications.as_deref()
    }

    pub fn reset_tag_specifications(&mut self) {
        self.tag_specifications = None;
    }

    pub fn set_cpu_options(&mut self, cpu_options: CpuOptions) {
        self.cpu_options = Some(cpu_options);
    }

    #[must_use]
    pub fn with_cpu_options(mut self, cpu_options: CpuOptions) -> Self {
        self.cpu_options = Some(cpu_options);
        self
    }

    pub fn cpu_options(&self) -> Option<&CpuOptions> {
        self.cpu_options.as_ref()
    }

    pub fn reset_cpu_options(&mut self) {
        self.cpu_options = None;
    }

    pub fn set_hibernation_options(&mut self, hibernation_options: HibernationOptions) {
        self.hibernation_options = Some(hibernation_options);
    }

    #[must_use]
    pub fn with_hibernation_options(mut self, hibernation_options: HibernationOptions) -> Self {
        self.hibernation_options = Some(hibernation_options);
        self
    }

    pub fn hibernation_options(&self) -> Option<&HibernationOptions> {
        self.hibernation_options.as_ref()
    }

    pub fn reset_hibernation_options(&mut self) {
        self.hibernation_options = None;
    }
}

impl fmt::Display for RunInstancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("BlockDeviceMappings", self.block_device_mappings.as_deref())?;
        w.field("ImageId", self.image_id.as_deref())?;
        w.field("InstanceType", self.instance_type.as_deref())?;
        w.field("KernelId", self.kernel_id.as_deref())?;
        w.field("KeyName", self.key_name.as_deref())?;
        w.field("MaxCount", self.max_count.as_ref())?;
        w.field("MinCount", self.min_count.as_ref())?;
        w.field("Monitoring", self.monitoring.as_ref())?;
        w.field("Placement", self.placement.as_ref())?;
        w.field("RamdiskId", self.ramdisk_id.as_deref())?;
        w.list("SecurityGroupIds", self.security_group_ids.as_deref())?;
        w.list("SecurityGroups", self.security_groups.as_deref())?;
        w.field("SubnetId", self.subnet_id.as_deref())?;
        w.field("UserData", self.user_data.as_deref())?;
        w.field("AdditionalInfo", self.additional_info.as_deref())?;
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field("DisableApiTermination", self.disable_api_termination.as_ref())?;
        w.field("DryRun", self.dry_run.as_ref())?;
        w.field("EbsOptimized", self.ebs_optimized.as_ref())?;
        w.field("IamInstanceProfile", self.iam_instance_profile.as_ref())?;
        w.field(
            "InstanceInitiatedShutdownBehavior",
            self.instance_initiated_shutdown_behavior.as_deref(),
        )?;
        w.field("PrivateIpAddress", self.private_ip_address.as_deref())?;
        w.list("TagSpecifications", self.tag_specifications.as_deref())?;
        w.field("CpuOptions", self.cpu_options.as_ref())?;
        w.field("HibernationOptions", self.hibernation_options.as_ref())?;
        w.finish()
    }
}

impl StableHash for RunInstancesRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.block_device_mappings,
            &self.image_id,
            &self.instance_type,
            &self.kernel_id,
            &self.key_name,
            &self.max_count,
            &self.min_count,
            &self.monitoring,
            &self.placement,
            &self.ramdisk_id,
            &self.security_group_ids,
            &self.security_groups,
            &self.subnet_id,
            &self.user_data,
            &self.additional_info,
            &self.client_token,
            &self.disable_api_termination,
            &self.dry_run,
            &self.ebs_optimized,
            &self.iam_instance_profile,
            &self.instance_initiated_shutdown_behavior,
            &self.private_ip_address,
            &self.tag_specifications,
            &self.cpu_options,
            &self.hibernation_options,
        ])
    }
}

impl std::hash::Hash for RunInstancesRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
