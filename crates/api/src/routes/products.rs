//! Route definitions for products.

use axelin_db::repositories::ProductRepo;
use axum::routing::get;
use axum::Router;

use crate::handlers::{crud, products};
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /               -> list_products (?seller_id, ?status)
/// POST   /               -> create
/// GET    /{id}           -> get
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/reviews   -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(crud::create::<ProductRepo>),
        )
        .route(
            "/{id}",
            get(crud::get::<ProductRepo>)
                .put(crud::update::<ProductRepo>)
                .delete(crud::delete::<ProductRepo>),
        )
        .route("/{id}/reviews", get(products::list_reviews))
}
