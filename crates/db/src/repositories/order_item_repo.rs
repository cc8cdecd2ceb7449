use axelin_core::types::{DbId, EntityUuid};
use axelin_postgrest::{EntityProxy, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::order_item::{CreateOrderItem, OrderItem, UpdateOrderItem};

/// Provides CRUD and per-order listing for order line items.
pub struct OrderItemRepo;

impl Resource for OrderItemRepo {
    const TABLE: &'static str = "order_items";
    const ENTITY: &'static str = "Order item";
    type Id = DbId;
    type Row = OrderItem;
    type Create = CreateOrderItem;
    type Update = UpdateOrderItem;
}

impl OrderItemRepo {
    /// All line items of one order, in backend order.
    pub async fn list_by_order(
        client: &PostgrestClient,
        order_id: EntityUuid,
    ) -> Result<Vec<OrderItem>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .list_where(Query::new().eq("order_id", order_id))
            .await
    }
}
