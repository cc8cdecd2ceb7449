//! Route definitions for categories.

use axelin_db::repositories::CategoryRepo;
use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, crud};
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// `PUT /{id}` uses [`categories::update_category`] so a category cannot
/// become its own parent.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /main            -> list_main
/// GET    /tree            -> list_tree
/// GET    /{id}            -> get
/// PUT    /{id}            -> update_category
/// DELETE /{id}            -> delete
/// GET    /{id}/children   -> list_children
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud::list::<CategoryRepo>).post(crud::create::<CategoryRepo>),
        )
        .route("/main", get(categories::list_main))
        .route("/tree", get(categories::list_tree))
        .route(
            "/{id}",
            get(crud::get::<CategoryRepo>)
                .put(categories::update_category)
                .delete(crud::delete::<CategoryRepo>),
        )
        .route("/{id}/children", get(categories::list_children))
}
