// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

use crate::models::{InternetGatewayAttachment, Tag};

/// InternetGateway : Describes an internet gateway.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InternetGateway {
    #[serde(rename = "Attachments", skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<InternetGatewayAttachment>>,
    #[serde(rename = "InternetGatewayId", skip_serializing_if = "Option::is_none")]
    internet_gateway_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl InternetGateway {
    /// Describes an internet gateway.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attachments(&mut self, attachments: Vec<InternetGatewayAttachment>) {
        self.attachments = Some(attachments);
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<InternetGatewayAttachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Appends one attachment; the backing list is allocated on first
    /// use.
    #[must_use]
    pub fn with_attachment(mut self, attachment: InternetGatewayAttachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    pub fn attachments(&self) -> Option<&[InternetGatewayAttachment]> {
        self.attachments.as_deref()
    }

    pub fn reset_attachments(&mut self) {
        self.attachments = None;
    }

    pub fn set_internet_gateway_id(&mut self, internet_gateway_id: String) {
        self.internet_gateway_id = Some(internet_gateway_id);
    }

    #[must_use]
    pub fn with_internet_gateway_id(mut self, internet_gateway_id: String) -> Self {
        self.internet_gateway_id = Some(internet_gateway_id);
        self
    }

    pub fn internet_gateway_id(&self) -> Option<&str> {
        self.internet_gateway_id.as_deref()
    }

    pub fn reset_internet_gateway_id(&mut self) {
        self.internet_gateway_id = None;
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
}

impl fmt::Display for InternetGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.list("Attachments", self.attachments.as_deref())?;
        w.field("InternetGatewayId", self.internet_gateway_id.as_deref())?;
        w.field("OwnerId", self.owner_id.as_deref())?;
        w.list("Tags", self.tags.as_deref())?;
        w.finish()
    }
}

impl StableHash for InternetGateway {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.attachments, &self.internet_gateway_id, &self.owner_id, &self.tags])
    }
}

impl std::hash::Hash for InternetGateway {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
