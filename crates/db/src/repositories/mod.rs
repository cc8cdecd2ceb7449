//! Repository layer.
//!
//! Each repository is a zero-sized struct that implements
//! [`axelin_postgrest::Resource`] for one table, so the generic CRUD of
//! [`axelin_postgrest::EntityProxy`] applies to it. Table-specific queries
//! are async functions taking `&PostgrestClient` as the first argument.

pub mod ai_tool_repo;
pub mod category_repo;
pub mod country_repo;
pub mod order_item_repo;
pub mod order_repo;
pub mod product_repo;
pub mod profile_repo;
pub mod review_repo;
pub mod tag_repo;

pub use ai_tool_repo::AiToolRepo;
pub use category_repo::CategoryRepo;
pub use country_repo::CountryRepo;
pub use order_item_repo::OrderItemRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use profile_repo::ProfileRepo;
pub use review_repo::ReviewRepo;
pub use tag_repo::TagRepo;
