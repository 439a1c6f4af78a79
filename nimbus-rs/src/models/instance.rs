// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{
    CpuOptions, GroupIdentifier, HibernationOptions, IamInstanceProfile, InstanceBlockDeviceMapping,
    InstanceNetworkInterface, InstanceState, Monitoring, Placement, ProductCode, StateReason, Tag,
};

/// Instance : Describes a virtual machine instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Instance {
    #[serde(rename = "AmiLaunchIndex", skip_serializing_if = "Option::is_none")]
    ami_launch_index: Option<i32>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    key_name: Option<String>,
    #[serde(rename = "LaunchTime", skip_serializing_if = "Option::is_none")]
    launch_time: Option<DateTime<Utc>>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    monitoring: Option<Monitoring>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    private_ip_address: Option<String>,
    #[serde(rename = "ProductCodes", skip_serializing_if = "Option::is_none")]
    product_codes: Option<Vec<ProductCode>>,
    #[serde(rename = "PublicDnsName", skip_serializing_if = "Option::is_none")]
    public_dns_name: Option<String>,
    #[serde(rename = "PublicIpAddress", skip_serializing_if = "Option::is_none")]
    public_ip_address: Option<String>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    ramdisk_id: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<InstanceState>,
    #[serde(rename = "StateTransitionReason", skip_serializing_if = "Option::is_none")]
    state_transition_reason: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    vpc_id: Option<String>,
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    architecture: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    ebs_optimized: Option<bool>,
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    ena_support: Option<bool>,
    /// Valid values: `ovm | xen`.
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    hypervisor: Option<String>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    iam_instance_profile: Option<IamInstanceProfile>,
    /// Valid values: `spot | scheduled`.
    #[serde(rename = "InstanceLifecycle", skip_serializing_if = "Option::is_none")]
    instance_lifecycle: Option<String>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    network_interfaces: Option<Vec<InstanceNetworkInterface>>,
    #[serde(rename = "RootDeviceName", skip_serializing_if = "Option::is_none")]
    root_device_name: Option<String>,
    #[serde(rename = "RootDeviceType", skip_serializing_if = "Option::is_none")]
    root_device_type: Option<String>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    security_groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "SourceDestCheck", skip_serializing_if = "Option::is_none")]
    source_dest_check: Option<bool>,
    #[serde(rename = "SpotInstanceRequestId", skip_serializing_if = "Option::is_none")]
    spot_instance_request_id: Option<String>,
    #[serde(rename = "SriovNetSupport", skip_serializing_if = "Option::is_none")]
    sriov_net_support: Option<String>,
    #[serde(rename = "StateReason", skip_serializing_if = "Option::is_none")]
    state_reason: Option<StateReason>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(rename = "VirtualizationType", skip_serializing_if = "Option::is_none")]
    virtualization_type: Option<String>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    cpu_options: Option<CpuOptions>,
    #[serde(rename = "CapacityReservationId", skip_serializing_if = "Option::is_none")]
    capacity_reservation_id: Option<String>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    hibernation_options: Option<HibernationOptions>,
}

impl Instance {
    /// Describes a virtual machine instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ami_launch_index(&mut self, ami_launch_index: i32) {
        self.ami_launch_index = Some(ami_launch_index);
    }

    #[must_use]
    pub fn with_ami_launch_index(mut self, ami_launch_index: i32) -> Self {
        self.ami_launch_index = Some(ami_launch_index);
        self
    }

    pub fn ami_launch_index(&self) -> Option<i32> {
        self.ami_launch_index
    }

    pub fn reset_ami_launch_index(&mut self) {
        self.ami_launch_index = None;
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

    pub fn set_instance_id(&mut self, instance_id: String) {
        self.instance_id = Some(instance_id);
    }

    #[must_use]
    pub fn with_instance_id(mut self, instance_id: String) -> Self {
        self.instance_id = Some(instance_id);
        self
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn reset_instance_id(&mut self) {
        self.instance_id = None;
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

    pub fn set_launch_time(&mut self, launch_time: DateTime<Utc>) {
        self.launch_time = Some(launch_time);
    }

    #[must_use]
    pub fn with_launch_time(mut self, launch_time: DateTime<Utc>) -> Self {
        self.launch_time = Some(launch_time);
        self
    }

    pub fn launch_time(&self) -> Option<&DateTime<Utc>> {
        self.launch_time.as_ref()
    }

    pub fn reset_launch_time(&mut self) {
        self.launch_time = None;
    }

    pub fn set_monitoring(&mut self, monitoring: Monitoring) {
        self.monitoring = Some(monitoring);
    }

    #[must_use]
    pub fn with_monitoring(mut self, monitoring: Monitoring) -> Self {
        self.monitoring = Some(monitoring);
        self
    }

    pub fn monitoring(&self) -> Option<&Monitoring> {
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

    /// Accepts the literal string or a typed
    /// [`PlatformValues`](crate::models::PlatformValues) value.
    pub fn set_platform(&mut self, platform: impl Into<String>) {
        self.platform = Some(platform.into());
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn reset_platform(&mut self) {
        self.platform = None;
    }

    pub fn set_private_dns_name(&mut self, private_dns_name: String) {
        self.private_dns_name = Some(private_dns_name);
    }

    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: String) -> Self {
        self.private_dns_name = Some(private_dns_name);
        self
    }

    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    pub fn reset_private_dns_name(&mut self) {
        self.private_dns_name = None;
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

    pub fn set_product_codes(&mut self, product_codes: Vec<ProductCode>) {
        self.product_codes = Some(product_codes);
    }

    #[must_use]
    pub fn with_product_codes(mut self, product_codes: Vec<ProductCode>) -> Self {
        self.product_codes = Some(product_codes);
        self
    }

    /// Appends one product code; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_product_code(mut self, product_code: ProductCode) -> Self {
        self.product_codes.get_or_insert_with(Vec::new).push(product_code);
        self
    }

    pub fn product_codes(&self) -> Option<&[ProductCode]> {
        self.product_codes.as_deref()
    }

    pub fn reset_product_codes(&mut self) {
        self.product_codes = None;
    }

    pub fn set_public_dns_name(&mut self, public_dns_name: String) {
        self.public_dns_name = Some(public_dns_name);
    }

    #[must_use]
    pub fn with_public_dns_name(mut self, public_dns_name: String) -> Self {
        self.public_dns_name = Some(public_dns_name);
        self
    }

    pub fn public_dns_name(&self) -> Option<&str> {
        self.public_dns_name.as_deref()
    }

    pub fn reset_public_dns_name(&mut self) {
        self.public_dns_name = None;
    }

    pub fn set_public_ip_address(&mut self, public_ip_address: String) {
        self.public_ip_address = Some(public_ip_address);
    }

    #[must_use]
    pub fn with_public_ip_address(mut self, public_ip_address: String) -> Self {
        self.public_ip_address = Some(public_ip_address);
        self
    }

    pub fn public_ip_address(&self) -> Option<&str> {
        self.public_ip_address.as_deref()
    }

    pub fn reset_public_ip_address(&mut self) {
        self.public_ip_address = None;
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

    pub fn set_state(&mut self, state: InstanceState) {
        self.state = Some(state);
    }

    #[must_use]
    pub fn with_state(mut self, state: InstanceState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn state(&self) -> Option<&InstanceState> {
        self.state.as_ref()
    }

    pub fn reset_state(&mut self) {
        self.state = None;
    }

    pub fn set_state_transition_reason(&mut self, state_transition_reason: String) {
        self.state_transition_reason = Some(state_transition_reason);
    }

    #[must_use]
    pub fn with_state_transition_reason(mut self, state_transition_reason: String) -> Self {
        self.state_transition_reason = Some(state_transition_reason);
        self
    }

    pub fn state_transition_reason(&self) -> Option<&str> {
        self.state_transition_reason.as_deref()
    }

    pub fn reset_state_transition_reason(&mut self) {
        self.state_transition_reason = None;
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

    /// Accepts the literal string or a typed
    /// [`ArchitectureValues`](crate::models::ArchitectureValues) value.
    pub fn set_architecture(&mut self, architecture: impl Into<String>) {
        self.architecture = Some(architecture.into());
    }

    #[must_use]
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    pub fn reset_architecture(&mut self) {
        self.architecture = None;
    }

    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Vec<InstanceBlockDeviceMapping>,
    ) {
        self.block_device_mappings = Some(block_device_mappings);
    }

    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: Vec<InstanceBlockDeviceMapping>,
    ) -> Self {
        self.block_device_mappings = Some(block_device_mappings);
        self
    }

    /// Appends one block device mapping; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_block_device_mapping(
        mut self,
        block_device_mapping: InstanceBlockDeviceMapping,
    ) -> Self {
        self.block_device_mappings.get_or_insert_with(Vec::new).push(block_device_mapping);
        self
    }

    pub fn block_device_mappings(&self) -> Option<&[InstanceBlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    pub fn reset_block_device_mappings(&mut self) {
        self.block_device_mappings = None;
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

    pub fn set_ena_support(&mut self, ena_support: bool) {
        self.ena_support = Some(ena_support);
    }

    #[must_use]
    pub fn with_ena_support(mut self, ena_support: bool) -> Self {
        self.ena_support = Some(ena_support);
        self
    }

    pub fn ena_support(&self) -> Option<bool> {
        self.ena_support
    }

    pub fn reset_ena_support(&mut self) {
        self.ena_support = None;
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

    pub fn set_iam_instance_profile(&mut self, iam_instance_profile: IamInstanceProfile) {
        self.iam_instance_profile = Some(iam_instance_profile);
    }

    #[must_use]
    pub fn with_iam_instance_profile(mut self, iam_instance_profile: IamInstanceProfile) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile);
        self
    }

    pub fn iam_instance_profile(&self) -> Option<&IamInstanceProfile> {
        self.iam_instance_profile.as_ref()
    }

    pub fn reset_iam_instance_profile(&mut self) {
        self.iam_instance_profile = None;
    }

    pub fn set_instance_lifecycle(&mut self, instance_lifecycle: String) {
        self.instance_lifecycle = Some(instance_lifecycle);
    }

    #[must_use]
    pub fn with_instance_lifecycle(mut self, instance_lifecycle: String) -> Self {
        self.instance_lifecycle = Some(instance_lifecycle);
        self
    }

    pub fn instance_lifecycle(&self) -> Option<&str> {
        self.instance_lifecycle.as_deref()
    }

    pub fn reset_instance_lifecycle(&mut self) {
        self.instance_lifecycle = None;
    }

    pub fn set_network_interfaces(&mut self, network_interfaces: Vec<InstanceNetworkInterface>) {
        self.network_interfaces = Some(network_interfaces);
    }

    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: Vec<InstanceNetworkInterface>,
    ) -> Self {
        self.network_interfaces = Some(network_interfaces);
        self
    }

    /// Appends one network interface; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_network_interface(mut self, network_interface: InstanceNetworkInterface) -> Self {
        self.network_interfaces.get_or_insert_with(Vec::new).push(network_interface);
        self
    }

    pub fn network_interfaces(&self) -> Option<&[InstanceNetworkInterface]> {
        self.network_interfaces.as_deref()
    }

    pub fn reset_network_interfaces(&mut self) {
        self.network_interfaces = None;
    }

    pub fn set_root_device_name(&mut self, root_device_name: String) {
        self.root_device_name = Some(root_device_name);
    }

    #[must_use]
    pub fn with_root_device_name(mut self, root_device_name: String) -> Self {
        self.root_device_name = Some(root_device_name);
        self
    }

    pub fn root_device_name(&self) -> Option<&str> {
        self.root_device_name.as_deref()
    }

    pub fn reset_root_device_name(&mut self) {
        self.root_device_name = None;
    }

    /// Accepts the literal string or a typed
    /// [`DeviceType`](crate::models::DeviceType) value.
    pub fn set_root_device_type(&mut self, root_device_type: impl Into<String>) {
        self.root_device_type = Some(root_device_type.into());
    }

    #[must_use]
    pub fn with_root_device_type(mut self, root_device_type: impl Into<String>) -> Self {
        self.root_device_type = Some(root_device_type.into());
        self
    }

    pub fn root_device_type(&self) -> Option<&str> {
        self.root_device_type.as_deref()
    }

    pub fn reset_root_device_type(&mut self) {
        self.root_device_type = None;
    }

    pub fn set_security_groups(&mut self, security_groups: Vec<GroupIdentifier>) {
        self.security_groups = Some(security_groups);
    }

    #[must_use]
    pub fn with_security_groups(mut self, security_groups: Vec<GroupIdentifier>) -> Self {
        self.security_groups = Some(security_groups);
        self
    }

    /// Appends one security group; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_security_group(mut self, security_group: GroupIdentifier) -> Self {
        self.security_groups.get_or_insert_with(Vec::new).push(security_group);
        self
    }

    pub fn security_groups(&self) -> Option<&[GroupIdentifier]> {
        self.security_groups.as_deref()
    }

    pub fn reset_security_groups(&mut self) {
        self.security_groups = None;
    }

    pub fn set_source_dest_check(&mut self, source_dest_check: bool) {
        self.source_dest_check = Some(source_dest_check);
    }

    #[must_use]
    pub fn with_source_dest_check(mut self, source_dest_check: bool) -> Self {
        self.source_dest_check = Some(source_dest_check);
        self
    }

    pub fn source_dest_check(&self) -> Option<bool> {
        self.source_dest_check
    }

    pub fn reset_source_dest_check(&mut self) {
        self.source_dest_check = None;
    }

    pub fn set_spot_instance_request_id(&mut self, spot_instance_request_id: String) {
        self.spot_instance_request_id = Some(spot_instance_request_id);
    }

    #[must_use]
    pub fn with_spot_instance_request_id(mut self, spot_instance_request_id: String) -> Self {
        self.spot_instance_request_id = Some(spot_instance_request_id);
        self
    }

    pub fn spot_instance_request_id(&self) -> Option<&str> {
        self.spot_instance_request_id.as_deref()
    }

    pub fn reset_spot_instance_request_id(&mut self) {
        self.spot_instance_request_id = None;
    }

    pub fn set_sriov_net_support(&mut self, sriov_net_support: String) {
        self.sriov_net_support = Some(sriov_net_support);
    }

    #[must_use]
    pub fn with_sriov_net_support(mut self, sriov_net_support: String) -> Self {
        self.sriov_net_support = Some(sriov_net_support);
        self
    }

    pub fn sriov_net_support(&self) -> Option<&str> {
        self.sriov_net_support.as_deref()
    }

    pub fn reset_sriov_net_support(&mut self) {
        self.sriov_net_support = None;
    }

    pub fn set_state_reason(&mut self, state_reason: StateReason) {
        self.state_reason = Some(state_reason);
    }

    #[must_use]
    pub fn with_state_reason(mut self, state_reason: StateReason) -> Self {
        self.state_reason = Some(state_reason);
        self
    }

    pub fn state_reason(&self) -> Option<&StateReason> {
        self.state_reason.as_ref()
    }

    pub fn reset_state_reason(&mut self) {
        self.state_reason = None;
    }

    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = Some(tags);
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Appends one tag; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn reset_tags(&mut self) {
        self.tags = None;
    }

    /// Accepts the literal string or a typed
    /// [`VirtualizationType`](crate::models::VirtualizationType) value.
    pub fn set_virtualization_type(&mut self, virtualization_type: impl Into<String>) {
        self.virtualization_type = Some(virtualization_type.into());
    }

    #[must_use]
    pub fn with_virtualization_type(mut self, virtualization_type: impl Into<String>) -> Self {
        self.virtualization_type = Some(virtualization_type.into());
        self
    }

    pub fn virtualization_type(&self) -> Option<&str> {
        self.virtualization_type.as_deref()
    }

    pub fn reset_virtualization_type(&mut self) {
        self.virtualization_type = None;
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

    pub fn set_capacity_reservation_id(&mut self, capacity_reservation_id: String) {
        self.capacity_reservation_id = Some(capacity_reservation_id);
    }

    #[must_use]
    pub fn with_capacity_reservation_id(mut self, capacity_reservation_id: String) -> Self {
        self.capacity_reservation_id = Some(capacity_reservation_id);
        self
    }

    pub fn capacity_reservation_id(&self) -> Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    pub fn reset_capacity_reservation_id(&mut self) {
        self.capacity_reservation_id = None;
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

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("AmiLaunchIndex", self.ami_launch_index.as_ref())?;
        w.field("ImageId", self.image_id.as_deref())?;
        w.field("InstanceId", self.instance_id.as_deref())?;
        w.field("InstanceType", self.instance_type.as_deref())?;
        w.field("KernelId", self.kernel_id.as_deref())?;
        w.field("KeyName", self.key_name.as_deref())?;
        w.field("LaunchTime", self.launch_time.as_ref())?;
        w.field("Monitoring", self.monitoring.as_ref())?;
        w.field("Placement", self.placement.as_ref())?;
        w.field("Platform", self.platform.as_deref())?;
        w.field("PrivateDnsName", self.private_dns_name.as_deref())?;
        w.field("PrivateIpAddress", self.private_ip_address.as_deref())?;
        w.list("ProductCodes", self.product_codes.as_deref())?;
        w.field("PublicDnsName", self.public_dns_name.as_deref())?;
        w.field("PublicIpAddress", self.public_ip_address.as_deref())?;
        w.field("RamdiskId", self.ramdisk_id.as_deref())?;
        w.field("State", self.state.as_ref())?;
        w.field("StateTransitionReason", self.state_transition_reason.as_deref())?;
        w.field("SubnetId", self.subnet_id.as_deref())?;
        w.field("VpcId", self.vpc_id.as_deref())?;
        w.field("Architecture", self.architecture.as_deref())?;
        w.list("BlockDeviceMappings", self.block_device_mappings.as_deref())?;
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field("EbsOptimized", self.ebs_optimized.as_ref())?;
        w.field("EnaSupport", self.ena_support.as_ref())?;
        w.field("Hypervisor", self.hypervisor.as_deref())?;
        w.field("IamInstanceProfile", self.iam_instance_profile.as_ref())?;
        w.field("InstanceLifecycle", self.instance_lifecycle.as_deref())?;
        w.list("NetworkInterfaces", self.network_interfaces.as_deref())?;
        w.field("RootDeviceName", self.root_device_name.as_deref())?;
        w.field("RootDeviceType", self.root_device_type.as_deref())?;
        w.list("SecurityGroups", self.security_groups.as_deref())?;
        w.field("SourceDestCheck", self.source_dest_check.as_ref())?;
        w.field("SpotInstanceRequestId", self.spot_instance_request_id.as_deref())?;
        w.field("SriovNetSupport", self.sriov_net_support.as_deref())?;
        w.field("StateReason", self.state_reason.as_ref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.field("VirtualizationType", self.virtualization_type.as_deref())?;
        w.field("CpuOptions", self.cpu_options.as_ref())?;
        w.field("CapacityReservationId", self.capacity_reservation_id.as_deref())?;
        w.field("HibernationOptions", self.hibernation_options.as_ref())?;
        w.finish()
    }
}

impl StableHash for Instance {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.ami_launch_index,
            &self.image_id,
            &self.instance_id,
            &self.instance_type,
            &self.kernel_id,
            &self.key_name,
            &self.launch_time,
            &self.monitoring,
            &self.placement,
            &self.platform,
            &self.private_dns_name,
            &self.private_ip_address,
            &self.product_codes,
            &self.public_dns_name,
            &self.public_ip_address,
            &self.ramdisk_id,
            &self.state,
            &self.state_transition_reason,
            &self.subnet_id,
            &self.vpc_id,
            &self.architecture,
            &self.block_device_mappings,
            &self.client_token,
            &self.ebs_optimized,
            &self.ena_support,
            &self.hypervisor,
            &self.iam_instance_profile,
            &self.instance_lifecycle,
            &self.network_interfaces,
            &self.root_device_name,
            &self.root_device_type,
            &self.security_groups,
            &self.source_dest_check,
            &self.spot_instance_request_id,
            &self.sriov_net_support,
            &self.state_reason,
            &self.tags,
            &self.virtualization_type,
            &self.cpu_options,
            &self.capacity_reservation_id,
            &self.hibernation_options,
        ])
    }
}

impl std::hash::Hash for Instance {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
