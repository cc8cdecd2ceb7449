//! Repository for the `categories` table.

use axelin_core::types::DbId;
use axelin_postgrest::{EntityProxy, Order, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::category::{Category, CategoryTree, CreateCategory, UpdateCategory};

/// Embeds each main category's children through the `parent_id` self-reference.
const TREE_SELECT: &str = "*,sub_categories:categories(*)";

/// Provides CRUD and tree queries for categories.
pub struct CategoryRepo;

impl Resource for CategoryRepo {
    const TABLE: &'static str = "categories";
    const ENTITY: &'static str = "Category";
    type Id = DbId;
    type Row = Category;
    type Create = CreateCategory;
    type Update = UpdateCategory;
}

impl CategoryRepo {
    /// Top-level categories (`parent_id IS NULL`), by name.
    pub async fn list_main(client: &PostgrestClient) -> Result<Vec<Category>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .list_where(Query::new().is_null("parent_id").order("name", Order::Asc))
            .await
    }

    /// Direct children of `parent_id`, by name.
    pub async fn list_children(
        client: &PostgrestClient,
        parent_id: DbId,
    ) -> Result<Vec<Category>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .list_where(
                Query::new()
                    .eq("parent_id", parent_id)
                    .order("name", Order::Asc),
            )
            .await
    }

    /// Main categories with their sub-categories embedded, in one round trip.
    pub async fn list_tree(client: &PostgrestClient) -> Result<Vec<CategoryTree>, PostgrestError> {
        let query = Query::new()
            .is_null("parent_id")
            .select(TREE_SELECT)
            .order("name", Order::Asc);
        client.select(Self::TABLE, query).await
    }
}
