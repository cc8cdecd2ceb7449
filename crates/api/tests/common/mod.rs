#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use axelin_api::config::ServerConfig;
use axelin_api::router::build_app_router;
use axelin_api::state::AppState;
use axelin_postgrest::{PostgrestClient, PostgrestConfig};
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` pointing at `upstream_uri` (a wiremock server).
///
/// Uses `http://localhost:3000` as CORS origin and short upstream timeouts
/// so timeout tests finish quickly.
pub fn test_config(upstream_uri: &str) -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        postgrest: PostgrestConfig::new(upstream_uri, "test-key")
            .with_timeouts(Duration::from_secs(1), Duration::from_millis(500)),
    }
}

/// Build the full application router, with every middleware layer, against
/// the given upstream.
pub fn build_test_app(upstream_uri: &str) -> Router {
    let config = test_config(upstream_uri);
    let postgrest = PostgrestClient::new(&config.postgrest).unwrap();

    let state = AppState {
        postgrest,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Numeric literal kept digit-exact, as PostgREST sends `numeric` columns.
pub fn num(literal: &str) -> serde_json::Value {
    serde_json::from_str(literal).unwrap()
}
