//! Route definitions for tags.

use axelin_db::repositories::TagRepo;
use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// Tag routes mounted at `/tags`: the standard CRUD routes plus
/// `GET /by-slug/{slug}`.
pub fn router() -> Router<AppState> {
    super::crud_router::<TagRepo>().route("/by-slug/{slug}", get(tags::get_by_slug))
}
