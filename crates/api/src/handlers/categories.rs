//! Handlers for the category tree.

use axelin_core::error::CoreError;
use axelin_core::types::DbId;
use axelin_core::validation::{validate_parent, Validate};
use axelin_db::models::category::UpdateCategory;
use axelin_db::repositories::CategoryRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// GET /api/categories/main
pub async fn list_main(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_main(&state.postgrest).await?;

    Ok(Json(categories))
}

/// GET /api/categories/tree
///
/// Main categories with their direct children embedded as `sub_categories`.
pub async fn list_tree(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tree = CategoryRepo::list_tree(&state.postgrest).await?;

    Ok(Json(tree))
}

/// GET /api/categories/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    AppPath(parent_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let children = CategoryRepo::list_children(&state.postgrest, parent_id).await?;

    Ok(Json(children))
}

/// PUT /api/categories/{id}
///
/// Same as the generic update, plus the self-parent check which needs the
/// path id.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_parent(id, input.parent_id.flatten())?;

    let category = state
        .proxy::<CategoryRepo>()
        .update(&id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Category", id)))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}
