// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::TagSpecification;

/// CreateFlowLogsRequest : Parameters for turning on traffic flow logging for
/// a set of network resources.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateFlowLogsRequest {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    client_token: Option<String>,
    #[serde(rename = "DeliverLogsPermissionArn", skip_serializing_if = "Option::is_none")]
    deliver_logs_permission_arn: Option<String>,
    #[serde(rename = "LogGroupName", skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(rename = "ResourceIds", skip_serializing_if = "Option::is_none")]
    resource_ids: Option<Vec<String>>,
    /// Valid values: `VPC | Subnet | NetworkInterface`.
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    /// Valid values: `ACCEPT | REJECT | ALL`.
    #[serde(rename = "TrafficType", skip_serializing_if = "Option::is_none")]
    traffic_type: Option<String>,
    /// Valid values: `cloud-watch-logs | s3`.
    #[serde(rename = "LogDestinationType", skip_serializing_if = "Option::is_none")]
    log_destination_type: Option<String>,
    #[serde(rename = "LogDestination", skip_serializing_if = "Option::is_none")]
    log_destination: Option<String>,
    #[serde(rename = "LogFormat", skip_serializing_if = "Option::is_none")]
    log_format: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "MaxAggregationInterval", skip_serializing_if = "Option::is_none")]
    max_aggregation_interval: Option<i32>,
}

impl CreateFlowLogsRequest {
    /// Parameters for turning on traffic flow logging for a set of network
    /// resources.
    pub fn new() -> Self {
        Self::default()
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

    pub fn set_deliver_logs_permission_arn(&mut self, deliver_logs_permission_arn: String) {
        self.deliver_logs_permission_arn = Some(deliver_logs_permission_arn);
    }

    #[must_use]
    pub fn with_deliver_logs_permission_arn(mut self, deliver_logs_permission_arn: String) -> Self {
        self.deliver_logs_permission_arn = Some(deliver_logs_permission_arn);
        self
    }

    pub fn deliver_logs_permission_arn(&self) -> Option<&str> {
        self.deliver_logs_permission_arn.as_deref()
    }

    pub fn reset_deliver_logs_permission_arn(&mut self) {
        self.deliver_logs_permission_arn = None;
    }

    pub fn set_log_group_name(&mut self, log_group_name: String) {
        self.log_group_name = Some(log_group_name);
    }

    #[must_use]
    pub fn with_log_group_name(mut self, log_group_name: String) -> Self {
        self.log_group_name = Some(log_group_name);
        self
    }

    pub fn log_group_name(&self) -> Option<&str> {
        self.log_group_name.as_deref()
    }

    pub fn reset_log_group_name(&mut self) {
        self.log_group_name = None;
    }

    pub fn set_resource_ids(&mut self, resource_ids: Vec<String>) {
        self.resource_ids = Some(resource_ids);
    }

    #[must_use]
    pub fn with_resource_ids(mut self, resource_ids: Vec<String>) -> Self {
        self.resource_ids = Some(resource_ids);
        self
    }

    /// Appends one resource id; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: String) -> Self {
        self.resource_ids.get_or_insert_with(Vec::new).push(resource_id);
        self
    }

    pub fn resource_ids(&self) -> Option<&[String]> {
        self.resource_ids.as_deref()
    }

    pub fn reset_resource_ids(&mut self) {
        self.resource_ids = None;
    }

    pub fn set_resource_type(&mut self, resource_type: String) {
        self.resource_type = Some(resource_type);
    }

    #[must_use]
    pub fn with_resource_type(mut self, resource_type: String) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn reset_resource_type(&mut self) {
        self.resource_type = None;
    }

    pub fn set_traffic_type(&mut self, traffic_type: String) {
        self.traffic_type = Some(traffic_type);
    }

    #[must_use]
    pub fn with_traffic_type(mut self, traffic_type: String) -> Self {
        self.traffic_type = Some(traffic_type);
        self
    }

    pub fn traffic_type(&self) -> Option<&str> {
        self.traffic_type.as_deref()
    }

    pub fn reset_traffic_type(&mut self) {
        self.traffic_type = None;
    }

    pub fn set_log_destination_type(&mut self, log_destination_type: String) {
        self.log_destination_type = Some(log_destination_type);
    }

    #[must_use]
    pub fn with_log_destination_type(mut self, log_destination_type: String) -> Self {
        self.log_destination_type = Some(log_destination_type);
        self
    }

    pub fn log_destination_type(&self) -> Option<&str> {
        self.log_destination_type.as_deref()
    }

    pub fn reset_log_destination_type(&mut self) {
        self.log_destination_type = None;
    }

    pub fn set_log_destination(&mut self, log_destination: String) {
        self.log_destination = Some(log_destination);
    }

    #[must_use]
    pub fn with_log_destination(mut self, log_destination: String) -> Self {
        self.log_destination = Some(log_destination);
        self
    }

    pub fn log_destination(&self) -> Option<&str> {
        self.log_destination.as_deref()
    }

    pub fn reset_log_destination(&mut self) {
        self.log_destination = None;
    }

    pub fn set_log_format(&mut self, log_format: String) {
        self.log_format = Some(log_format);
    }

    #[must_use]
    pub fn with_log_format(mut self, log_format: String) -> Self {
        self.log_format = Some(log_format);
        self
    }

    pub fn log_format(&self) -> Option<&str> {
        self.log_format.as_deref()
    }

    pub fn reset_log_format(&mut self) {
        self.log_format = None;
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
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .push(tag_specification);
        self
    }

    pub fn tag_specifications(&self) -> Option<&[TagSpecification]> {
        self.tag_specifications.as_deref()
    }

    pub fn reset_tag_specifications(&mut self) {
        self.tag_specifications = None;
    }

    pub fn set_max_aggregation_interval(&mut self, max_aggregation_interval: i32) {
        self.max_aggregation_interval = Some(max_aggregation_interval);
    }

    #[must_use]
    pub fn with_max_aggregation_interval(mut self, max_aggregation_interval: i32) -> Self {
        self.max_aggregation_interval = Some(max_aggregation_interval);
        self
    }

    pub fn max_aggregation_interval(&self) -> Option<i32> {
        self.max_aggregation_interval
    }

    pub fn reset_max_aggregation_interval(&mut self) {
        self.max_aggregation_interval = None;
    }
}

impl fmt::Display for CreateFlowLogsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("DryRun", self.dry_run.as_ref())?;
        w.field("ClientToken", self.client_token.as_deref())?;
        w.field("DeliverLogsPermissionArn", self.deliver_logs_permission_arn.as_deref())?;
        w.field("LogGroupName", self.log_group_name.as_deref())?;
        w.list("ResourceIds", self.resource_ids.as_deref())?;
        w.field("ResourceType", self.resource_type.as_deref())?;
        w.field("TrafficType", self.traffic_type.as_deref())?;
        w.field("LogDestinationType", self.log_destination_type.as_deref())?;
        w.field("LogDestination", self.log_destination.as_deref())?;
        w.field("LogFormat", self.log_format.as_deref())?;
        w.list("TagSpecifications", self.tag_specifications.as_deref())?;
        w.field("MaxAggregationInterval", self.max_aggregation_interval.as_ref())?;
        w.finish()
    }
}

impl StableHash for CreateFlowLogsRequest {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[
            &self.dry_run,
            &self.client_token,
            &self.deliver_logs_permission_arn,
            &self.log_group_name,
            &self.resource_ids,
            &self.resource_type,
            &self.traffic_type,
            &self.log_destination_type,
            &self.log_destination,
            &self.log_format,
            &self.tag_specifications,
            &self.max_aggregation_interval,
        ])
    }
}

impl std::hash::Hash for CreateFlowLogsRequest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
