//! Route definitions for countries.

use axelin_db::repositories::CountryRepo;
use axum::Router;

use crate::state::AppState;

/// Standard CRUD routes backed by [`CountryRepo`].
pub fn router() -> Router<AppState> {
    super::crud_router::<CountryRepo>()
}
