//! Generic CRUD-over-PostgREST adapter.
//!
//! A [`Resource`] names a table and its row / create / update shapes;
//! [`EntityProxy`] turns that description into list, get, create, update
//! and delete calls. Identifiers are always sent as an `id=eq.<value>`
//! filter.

use std::fmt::Display;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::PostgrestClient;
use crate::error::PostgrestError;
use crate::query::Query;

/// Binding of one PostgREST table to its Rust types.
pub trait Resource {
    /// Table name as exposed by PostgREST.
    const TABLE: &'static str;
    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;

    /// Primary key type (`i64` or `Uuid`).
    type Id: Display + Send + Sync;
    /// Full row as returned by the backend.
    type Row: DeserializeOwned + Send;
    /// Insert payload, without server-assigned fields.
    type Create: Serialize + Send + Sync;
    /// Partial update payload.
    type Update: Serialize + Send + Sync;
}

/// Typed view of a [`PostgrestClient`] for one [`Resource`].
pub struct EntityProxy<R: Resource> {
    client: PostgrestClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for EntityProxy<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> EntityProxy<R> {
    pub fn new(client: PostgrestClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `GET /<table>?select=*`, rows in backend order.
    pub async fn list(&self) -> Result<Vec<R::Row>, PostgrestError> {
        self.list_where(Query::new().select("*")).await
    }

    /// `GET /<table>?<query>`. A query without `select` gets `select=*`.
    pub async fn list_where(&self, query: Query) -> Result<Vec<R::Row>, PostgrestError> {
        let rows: Vec<R::Row> = self.client.select(R::TABLE, query.or_select_all()).await?;
        tracing::debug!(table = R::TABLE, count = rows.len(), "Listed rows");
        Ok(rows)
    }

    /// `GET /<table>?id=eq.<id>&select=*`. `Ok(None)` when no row matches.
    pub async fn get(&self, id: &R::Id) -> Result<Option<R::Row>, PostgrestError> {
        self.find_one(Query::new().eq("id", id).select("*")).await
    }

    /// First row matching `query`, if any.
    pub async fn find_one(&self, query: Query) -> Result<Option<R::Row>, PostgrestError> {
        let rows = self.client.select(R::TABLE, query.or_select_all()).await?;
        Ok(first_row(rows))
    }

    /// `POST /<table>` and return the created row with server-assigned fields.
    pub async fn create(&self, input: &R::Create) -> Result<R::Row, PostgrestError> {
        let rows = self.client.insert(R::TABLE, input).await?;
        let row = first_row(rows).ok_or(PostgrestError::EmptyRepresentation { table: R::TABLE })?;
        tracing::debug!(table = R::TABLE, "Row created");
        Ok(row)
    }

    /// `PATCH /<table>?id=eq.<id>`. `Ok(None)` when no row matched the id.
    pub async fn update(
        &self,
        id: &R::Id,
        input: &R::Update,
    ) -> Result<Option<R::Row>, PostgrestError> {
        let rows = self
            .client
            .update(R::TABLE, Query::new().eq("id", id), input)
            .await?;
        let row = first_row(rows);
        tracing::debug!(table = R::TABLE, %id, matched = row.is_some(), "Row updated");
        Ok(row)
    }

    /// `DELETE /<table>?id=eq.<id>`. Any 2xx is success.
    pub async fn delete(&self, id: &R::Id) -> Result<(), PostgrestError> {
        self.client
            .delete(R::TABLE, Query::new().eq("id", id))
            .await?;
        tracing::debug!(table = R::TABLE, %id, "Row deleted");
        Ok(())
    }
}

/// Unwrap PostgREST's array-for-singular convention.
pub fn first_row<T>(rows: Vec<T>) -> Option<T> {
    rows.into_iter().next()
}
