//! Route definitions for order items.

use axelin_db::repositories::OrderItemRepo;
use axum::Router;

use crate::state::AppState;

/// Standard CRUD routes backed by [`OrderItemRepo`].
pub fn router() -> Router<AppState> {
    super::crud_router::<OrderItemRepo>()
}
