pub mod ai_tools;
pub mod categories;
pub mod countries;
pub mod health;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod reviews;
pub mod tags;

use axum::routing::get;
use axum::Router;

use crate::handlers::crud::{self, ApiResource};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                      list, create
/// /categories/main                 main categories
/// /categories/tree                 main categories with sub_categories
/// /categories/{id}                 get, update, delete
/// /categories/{id}/children        sub-categories
///
/// /tags                            list, create
/// /tags/by-slug/{slug}             get by slug
/// /tags/{id}                       get, update, delete
///
/// /countries                       list, create
/// /countries/{id}                  get, update, delete
///
/// /ai-tools                        list, create
/// /ai-tools/{id}                   get, update, delete
///
/// /products                        list (?seller_id, ?status), create
/// /products/{id}                   get, update, delete
/// /products/{id}/reviews           reviews of a product
///
/// /orders                          list (?buyer_id), create
/// /orders/{id}                     get, update, delete
/// /orders/{id}/items               items of an order
///
/// /order-items                     list, create
/// /order-items/{id}                get, update, delete
///
/// /profiles                        list, create
/// /profiles/{id}                   get, update, delete
///
/// /reviews                         list, create
/// /reviews/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/tags", tags::router())
        .nest("/countries", countries::router())
        .nest("/ai-tools", ai_tools::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/order-items", order_items::router())
        .nest("/profiles", profiles::router())
        .nest("/reviews", reviews::router())
}

/// The five standard routes for a resource with no extras.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub(crate) fn crud_router<R: ApiResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(crud::list::<R>).post(crud::create::<R>))
        .route(
            "/{id}",
            get(crud::get::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}
