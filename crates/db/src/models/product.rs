//! Marketplace product models and DTOs.
//!
//! A product is something a seller lists, optionally tied to the AI tool it
//! targets. `content` is free-form JSON (`jsonb`).

use std::fmt;

use axelin_core::error::CoreError;
use axelin_core::patch::nullable;
use axelin_core::types::{DbId, Decimal, EntityUuid, Timestamp};
use axelin_core::validation::{
    optional_non_blank, require_any_field, require_non_blank, validate_non_negative, Validate,
};
use serde::{Deserialize, Serialize};

/// Listing lifecycle (`product_status` enum in the backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Published,
    Archived,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Published => "published",
            ProductStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityUuid,
    pub seller_id: EntityUuid,
    pub target_tool_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Backend `product_type` enum value.
    #[serde(rename = "type")]
    pub product_type: String,
    pub status: ProductStatus,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for listing a new product. `status` defaults to `draft` server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub seller_id: EntityUuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tool_id: Option<DbId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(rename = "type")]
    pub product_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    pub content: serde_json::Value,
}

/// DTO for updating a product. `updated_at` is maintained by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub target_tool_id: Option<Option<DbId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
}

/// Query parameters for the product list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    pub seller_id: Option<EntityUuid>,
    pub status: Option<ProductStatus>,
}

impl Validate for CreateProduct {
    fn validate(&self) -> Result<(), CoreError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("type", &self.product_type)?;
        validate_non_negative("price", &self.price)
    }
}

impl Validate for UpdateProduct {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[
            self.target_tool_id.is_some(),
            self.title.is_some(),
            self.description.is_some(),
            self.price.is_some(),
            self.product_type.is_some(),
            self.status.is_some(),
            self.content.is_some(),
        ])?;
        optional_non_blank("title", self.title.as_deref())?;
        optional_non_blank("type", self.product_type.as_deref())?;
        match &self.price {
            Some(price) => validate_non_negative("price", price),
            None => Ok(()),
        }
    }
}
