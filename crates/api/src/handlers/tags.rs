//! Handlers for tag lookups.

use axelin_core::error::CoreError;
use axelin_db::repositories::TagRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /api/tags/by-slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_slug(&state.postgrest, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tag", &slug)))?;

    Ok(Json(tag))
}
