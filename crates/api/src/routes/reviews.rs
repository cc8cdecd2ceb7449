//! Route definitions for reviews.

use axelin_db::repositories::ReviewRepo;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    super::crud_router::<ReviewRepo>()
}
