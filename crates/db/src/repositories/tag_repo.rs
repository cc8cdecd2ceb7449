//! Repository for the `tags` table.

use axelin_core::types::DbId;
use axelin_postgrest::{EntityProxy, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::tag::{CreateTag, Tag, UpdateTag};

/// Provides CRUD and slug lookup for tags.
pub struct TagRepo;

impl Resource for TagRepo {
    const TABLE: &'static str = "tags";
    const ENTITY: &'static str = "Tag";
    type Id = DbId;
    type Row = Tag;
    type Create = CreateTag;
    type Update = UpdateTag;
}

impl TagRepo {
    /// Find a tag by its unique slug.
    pub async fn find_by_slug(
        client: &PostgrestClient,
        slug: &str,
    ) -> Result<Option<Tag>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .find_one(Query::new().eq("slug", slug))
            .await
    }
}
