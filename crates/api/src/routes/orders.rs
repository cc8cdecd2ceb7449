//! Route definitions for orders.

use axelin_db::repositories::OrderRepo;
use axum::routing::get;
use axum::Router;

use crate::handlers::{crud, orders};
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// GET    /             -> list_orders (?buyer_id)
/// POST   /             -> create
/// GET    /{id}         -> get
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/items   -> list_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(crud::create::<OrderRepo>))
        .route(
            "/{id}",
            get(crud::get::<OrderRepo>)
                .put(crud::update::<OrderRepo>)
                .delete(crud::delete::<OrderRepo>),
        )
        .route("/{id}/items", get(orders::list_items))
}
