use std::sync::Arc;

use axelin_postgrest::{EntityProxy, PostgrestClient, Resource};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// PostgREST client, built once at startup.
    pub postgrest: PostgrestClient,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Typed CRUD proxy for one resource over the shared client.
    pub fn proxy<R: Resource>(&self) -> EntityProxy<R> {
        EntityProxy::new(self.postgrest.clone())
    }
}
