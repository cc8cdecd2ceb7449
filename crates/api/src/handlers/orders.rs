//! Handlers for order listing and order items.

use axelin_core::types::EntityUuid;
use axelin_db::models::order::OrderListParams;
use axelin_db::repositories::{OrderItemRepo, OrderRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

/// GET /api/orders?buyer_id=
pub async fn list_orders(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<OrderListParams>,
) -> AppResult<impl IntoResponse> {
    let orders = match params.buyer_id {
        Some(buyer_id) => OrderRepo::list_by_buyer(&state.postgrest, buyer_id).await?,
        None => state.proxy::<OrderRepo>().list().await?,
    };

    Ok(Json(orders))
}

/// GET /api/orders/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    AppPath(order_id): AppPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let items = OrderItemRepo::list_by_order(&state.postgrest, order_id).await?;

    Ok(Json(items))
}
