//! Repository for the `reviews` table.

use axelin_core::types::{DbId, EntityUuid};
use axelin_postgrest::{EntityProxy, Order, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::review::{CreateReview, Review, UpdateReview};

/// Provides CRUD and per-product listing for reviews.
pub struct ReviewRepo;

impl Resource for ReviewRepo {
    const TABLE: &'static str = "reviews";
    const ENTITY: &'static str = "Review";
    type Id = DbId;
    type Row = Review;
    type Create = CreateReview;
    type Update = UpdateReview;
}

impl ReviewRepo {
    /// Reviews of one product, newest first.
    pub async fn list_by_product(
        client: &PostgrestClient,
        product_id: EntityUuid,
    ) -> Result<Vec<Review>, PostgrestError> {
        EntityProxy::<Self>::new(client.clone())
            .list_where(
                Query::new()
                    .eq("product_id", product_id)
                    .order("created_at", Order::Desc),
            )
            .await
    }
}
