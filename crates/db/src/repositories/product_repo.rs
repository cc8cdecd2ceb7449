//! Repository for the `products` table.

use axelin_core::types::EntityUuid;
use axelin_postgrest::{EntityProxy, Order, PostgrestClient, PostgrestError, Query, Resource};

use crate::models::product::{CreateProduct, Product, ProductListParams, UpdateProduct};

/// Provides CRUD and filtered listing for products.
pub struct ProductRepo;

impl Resource for ProductRepo {
    const TABLE: &'static str = "products";
    const ENTITY: &'static str = "Product";
    type Id = EntityUuid;
    type Row = Product;
    type Create = CreateProduct;
    type Update = UpdateProduct;
}

impl ProductRepo {
    /// Products matching the optional seller / status filters, newest first.
    pub async fn list(
        client: &PostgrestClient,
        params: &ProductListParams,
    ) -> Result<Vec<Product>, PostgrestError> {
        let mut query = Query::new();
        if let Some(seller_id) = params.seller_id {
            query = query.eq("seller_id", seller_id);
        }
        if let Some(status) = params.status {
            query = query.eq("status", status);
        }

        EntityProxy::<Self>::new(client.clone())
            .list_where(query.order("created_at", Order::Desc))
            .await
    }
}
