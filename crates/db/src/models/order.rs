//! Order models and DTOs.

use axelin_core::error::CoreError;
use axelin_core::types::{Decimal, EntityUuid, Timestamp};
use axelin_core::validation::{
    optional_non_blank, require_any_field, validate_non_negative, Validate,
};
use serde::{Deserialize, Serialize};

/// A row from the `orders` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityUuid,
    pub buyer_id: EntityUuid,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub buyer_id: EntityUuid,
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Query parameters for the order list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    pub buyer_id: Option<EntityUuid>,
}

impl Validate for CreateOrder {
    fn validate(&self) -> Result<(), CoreError> {
        validate_non_negative("total_amount", &self.total_amount)?;
        optional_non_blank("status", self.status.as_deref())
    }
}

impl Validate for UpdateOrder {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[self.total_amount.is_some(), self.status.is_some()])?;
        if let Some(total) = &self.total_amount {
            validate_non_negative("total_amount", total)?;
        }
        optional_non_blank("status", self.status.as_deref())
    }
}
