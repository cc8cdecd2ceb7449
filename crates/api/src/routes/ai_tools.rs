//! Route definitions for the AI tool catalogue.

use axelin_db::repositories::AiToolRepo;
use axum::Router;

use crate::state::AppState;

/// Standard CRUD routes backed by [`AiToolRepo`].
pub fn router() -> Router<AppState> {
    super::crud_router::<AiToolRepo>()
}
