// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{BlockDeviceMapping, ProductCode, StateReason, Tag};

/// Image : Describes a machine image.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Image {
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    architecture: Option<String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    creation_date: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(rename = "ImageLocation", skip_serializing_if = "Option::is_none")]
    image_location: Option<String>,
    /// Valid values: `machine | kernel | ramdisk`.
    #[serde(rename = "ImageType", skip_serializing_if = "Option::is_none")]
    image_type: Option<String>,
    #[serde(rename = "Public", skip_serializing_if = "Option::is_none")]
    public: Option<bool>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    kernel_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(rename = "PlatformDetails", skip_serializing_if = "Option::is_none")]
    platform_details: Option<String>,
    #[serde(rename = "UsageOperation", skip_serializing_if = "Option::is_none")]
    usage_operation: Option<String>,
    #[serde(rename = "ProductCodes", skip_serializing_if = "Option::is_none")]
    product_codes: Option<Vec<ProductCode>>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    ramdisk_id: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    ena_support: Option<bool>,
    /// Valid values: `ovm | xen`.
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    hypervisor: Option<String>,
    #[serde(rename = "ImageOwnerAlias", skip_serializing_if = "Option::is_none")]
    image_owner_alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "RootDeviceName", skip_serializing_if = "Option::is_none")]
    root_device_name: Option<String>,
    #[serde(rename = "RootDeviceType", skip_serializing_if = "Option::is_none")]
    root_device_type: Option<String>,
    #[serde(rename = "SriovNetSupport", skip_serializing_if = "Option::is_none")]
    sriov_net_support: Option<String>,
    #[serde(rename = "StateReason", skip_serializing_if = "Option::is_none")]
    state_reason: Option<StateReason>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(rename = "VirtualizationType", skip_serializing_if = "Option::is_none")]
    virtualization_type: Option<String>,
}

impl Image {
    /// Describes a machine image.
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_creation_date(&mut self, creation_date: String) {
        self.creation_date = Some(creation_date);
    }

    #[must_use]
    pub fn with_creation_date(mut self, creation_date: String) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn creation_date(&self) -> Option<&str> {
        self.creation_date.as_deref()
    }

    pub fn reset_creation_date(&mut self) {
        self.creation_date = None;
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

    pub fn set_image_location(&mut self, image_location: String) {
        self.image_location = Some(image_location);
    }

    #[must_use]
    pub fn with_image_location(mut self, image_location: String) -> Self {
        self.image_location = Some(image_location);
        self
    }

    pub fn image_location(&self) -> Option<&str> {
        self.image_location.as_deref()
    }

    pub fn reset_image_location(&mut self) {
        self.image_location = None;
    }

    pub fn set_image_type(&mut self, image_type: String) {
        self.image_type = Some(image_type);
    }

    #[must_use]
    pub fn with_image_type(mut self, image_type: String) -> Self {
        self.image_type = Some(image_type);
        self
    }

    pub fn image_type(&self) -> Option<&str> {
        self.image_type.as_deref()
    }

    pub fn reset_image_type(&mut self) {
        self.image_type = None;
    }

    pub fn set_public(&mut self, public: bool) {
        self.public = Some(public);
    }

    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn public(&self) -> Option<bool> {
        self.public
    }

    pub fn reset_public(&mut self) {
        self.public = None;
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

    pub fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = Some(owner_id);
    }

    #[must_use]
    pub fn with_owner_id(mut self, owner_id: String) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn reset_owner_id(&mut self) {
        self.owner_id = None;
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

    pub fn set_platform_details(&mut self, platform_details: String) {
        self.platform_details = Some(platform_details);
    }

    #[must_use]
    pub fn with_platform_details(mut self, platform_details: String) -> Self {
        self.platform_details = Some(platform_details);
        self
    }

    pub fn platform_details(&self) -> Option<&str> {
        self.platform_details.as_deref()
    }

    pub fn reset_platform_details(&mut self) {
        self.platform_details = None;
    }

    pub fn set_usage_operation(&mut self, usage_operation: String) {
        self.usage_operation = Some(usage_operation);
    }

    #[must_use]
    pub fn with_usage_operation(mut self, usage_operation: String) -> Self {
        self.usage_operation = Some(usage_operation);
        self
    }

    pub fn usage_operation(&self) -> Option<&str> {
        self.usage_operation.as_deref()
    }

    pub fn reset_usage_operation(&mut self) {
        self.usage_operation = None;
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

    /// Accepts the literal string or a typed
    /// [`ImageState`](crate::models::ImageState) value.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn reset_state(&mut self) {
        self.state = None;
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

    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn reset_description(&mut self) {
        self.description = None;
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

    pub fn set_image_owner_alias(&mut self, image_owner_alias: String) {
        self.image_owner_alias = Some(image_owner_alias);
    }

    #[must_use]
    pub fn with_image_owner_alias(mut self, image_owner_alias: String) -> Self {
        self.image_owner_alias = Some(image_owner_alias);
        self
    }

    pub fn image_owner_alias(&self) -> Option<&str> {
        self.image_owner_alias.as_deref()
    }

    pub fn reset_image_owner_alias(&mut self) {
        self.image_owner_alias = None;
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
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("Architecture", self.architecture.as_deref())?;
        w.field("CreationDate", self.creation_date.as_deref())?;
        w.field("ImageId", self.image_id.as_deref())?;
        w.field("ImageLocation", self.image_location.as_deref())?;
        w.field("ImageType", self.image_type.as_deref())?;
        w.field("Public", self.public.as_ref())?;
        w.field("KernelId", self.kernel_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.field("Platform", self.platform.as_deref())?;
        w.field("PlatformDetails", self.platform_details.as_deref())?;
        w.field("UsageOperation", self.usage_operation.as_deref())?;
        w.list("ProductCodes", self.product_codes.as_deref())?;
        w.field("RamdiskId", self.ramdisk_id.as_deref())?;
        w.field("State", self.state.as_deref())?;
        w.list("BlockDeviceMappings", self.block_device_mappings.as_deref())?;
        w.field("Description", self.description.as_deref())?;
        w.field("EnaSupport", self.ena_support.as_ref())?;
        w.field("Hypervisor", self.hypervisor.as_deref())?;
        w.field("ImageOwnerAlias", self.image_owner_alias.as_deref())?;
        w.field("Name", self.name.as_deref())?;
        w.field("RootDeviceName", self.root_device_name.as_deref())?;
        w.field("RootDeviceType", self.root_device_type.as_deref())?;
        w.field("SriovNetSupport", self.sriov_net_support.as_deref())?;
        w.field("StateReason", self.state_reason.as_ref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.field("VirtualizationType", self.virtualization_type.as_deref())?;
        w.finish()
    }
}

impl StableHash for Image {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.architecture,
            &self.creation_date,
            &self.image_id,
            &self.image_location,
            &self.image_type,
            &self.public,
            &self.kernel_id,
            &self.owner_id,
            &self.platform,
            &self.platform_details,
            &self.usage_operation,
            &self.product_codes,
            &self.ramdisk_id,
            &self.state,
            &self.block_device_mappings,
            &self.description,
            &self.ena_support,
            &self.hypervisor,
            &self.image_owner_alias,
            &self.name,
            &self.root_device_name,
            &self.root_device_type,
            &self.sriov_net_support,
            &self.state_reason,
            &self.tags,
            &self.virtualization_type,
        ])
    }
}

impl std::hash::Hash for Image {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
