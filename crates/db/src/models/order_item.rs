//! Order line items.

use axelin_core::error::CoreError;
use axelin_core::types::{DbId, Decimal, EntityUuid};
use axelin_core::validation::{require_any_field, validate_non_negative, Validate};
use serde::{Deserialize, Serialize};

/// A row from the `order_items` table. The price is frozen at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: EntityUuid,
    pub product_id: EntityUuid,
    pub price_at_purchase: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub order_id: EntityUuid,
    pub product_id: EntityUuid,
    pub price_at_purchase: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_at_purchase: Option<Decimal>,
}

impl Validate for CreateOrderItem {
    fn validate(&self) -> Result<(), CoreError> {
        validate_non_negative("price_at_purchase", &self.price_at_purchase)
    }
}

impl Validate for UpdateOrderItem {
    fn validate(&self) -> Result<(), CoreError> {
        require_any_field(&[self.price_at_purchase.is_some()])?;
        match &self.price_at_purchase {
            Some(price) => validate_non_negative("price_at_purchase", price),
            None => Ok(()),
        }
    }
}
