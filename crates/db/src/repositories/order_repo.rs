//! Repository for the `orders` table.

use axelin_core::types::EntityUuid;
use axelin_postgrest::{EntityProxy, Order, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::order::{CreateOrder, Order as OrderRow, UpdateOrder};

/// Provides CRUD and per-buyer listing for orders.
pub struct OrderRepo;

impl Resource for OrderRepo {
    const TABLE: &'static str = "orders";
    const ENTITY: &'static str = "Order";
    type Id = EntityUuid;
    type Row = OrderRow;
    type Create = CreateOrder;
    type Update = UpdateOrder;
}

impl OrderRepo {
    /// A buyer's orders, newest first.
    pub async fn list_by_buyer(
        client: &PostgrestClient,
        buyer_id: EntityUuid,
    ) -> Result<Vec<OrderRow>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .list_where(
                Query::new()
                    .eq("buyer_id", buyer_id)
                    .order("created_at", Order::Desc),
            )
            .await
    }
}
