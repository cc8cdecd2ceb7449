//! Handlers for product listing and product reviews.

use axelin_core::types::EntityUuid;
use axelin_db::models::product::ProductListParams;
use axelin_db::repositories::{ProductRepo, ReviewRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

/// GET /api/products?seller_id=&status=
///
/// Both filters are optional; without them every product is returned,
/// newest first.
pub async fn list_products(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProductListParams>,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list(&state.postgrest, &params).await?;

    Ok(Json(products))
}

/// GET /api/products/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<EntityUuid>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list_by_product(&state.postgrest, product_id).await?;

    Ok(Json(reviews))
}
