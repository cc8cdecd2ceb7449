use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the PostgREST backend answered the ping.
    pub upstream_healthy: bool,
}

/// GET /health -- returns service and upstream health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream_healthy = match state.postgrest.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Upstream health ping failed");
            false
        }
    };

    let status = if upstream_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        upstream_healthy,
    })
}

/// Mount health check routes (root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
