//! Route definitions for profiles.

use axelin_db::repositories::ProfileRepo;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    super::crud_router::<ProfileRepo>()
}
