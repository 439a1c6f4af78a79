// Copyright (c) Microsoft. All rights reserved.

use std::fmt;

use serde::{Deserialize, Serialize};

use nimbus_utils::{hash_fields, FieldWriter, StableHash};

/// ProductCode : Describes a product code attached to an image or instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProductCode {
    #[serde(rename = "ProductCodeId", skip_serializing_if = "Option::is_none")]
    product_code_id: Option<String>,
    /// Valid values: `devpay | marketplace`.
    #[serde(rename = "ProductCodeType", skip_serializing_if = "Option::is_none")]
    product_code_type: Option<String>,
}

impl ProductCode {
    /// Describes a product code attached to an image or instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product_code_id(&mut self, product_code_id: String) {
        self.product_code_id = Some(product_code_id);
    }

    #[must_use]
    pub fn with_product_code_id(mut self, product_code_id: String) -> Self {
        self.product_code_id = Some(product_code_id);
        self
    }

    pub fn product_code_id(&self) -> Option<&str> {
        self.product_code_id.as_deref()
    }

    pub fn reset_product_code_id(&mut self) {
        self.product_code_id = None;
    }

    pub fn set_product_code_type(&mut self, product_code_type: String) {
        self.product_code_type = Some(product_code_type);
    }

    #[must_use]
    pub fn with_product_code_type(mut self, product_code_type: String) -> Self {
        self.product_code_type = Some(product_code_type);
        self
    }

    pub fn product_code_type(&self) -> Option<&str> {
        self.product_code_type.as_deref()
    }

    pub fn reset_product_code_type(&mut self) {
        self.product_code_type = None;
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f);
        w.field("ProductCodeId", self.product_code_id.as_deref())?;
        w.field("ProductCodeType", self.product_code_type.as_deref())?;
        w.finish()
    }
}

impl StableHash for ProductCode {
    fn stable_hash(&self) -> i32 {
        hash_fields(&[&self.product_code_id, &self.product_code_type])
    }
}

impl std::hash::Hash for ProductCode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.stable_hash());
    }
}
