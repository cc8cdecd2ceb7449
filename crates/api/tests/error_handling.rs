//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! upstream is involved.

use axelin_api::error::AppError;
use axelin_core::error::CoreError;
use axelin_postgrest::PostgrestError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Category", 42));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Category with id 42 not found");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name must not be blank".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be blank");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("service role key leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("key"));
}

// ---------------------------------------------------------------------------
// Upstream errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_conflict_keeps_status_and_passes_body_through() {
    let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint \"tags_slug_key\""}"#;
    let err = AppError::Upstream(PostgrestError::Upstream {
        status: 409,
        body: body.to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["details"]["code"], "23505");
}

#[tokio::test]
async fn upstream_server_error_becomes_bad_gateway() {
    let err = AppError::Upstream(PostgrestError::Upstream {
        status: 503,
        body: "upstream connect error".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    // Non-JSON bodies are passed through as a string.
    assert_eq!(json["details"], "upstream connect error");
}

#[tokio::test]
async fn undecodable_upstream_body_becomes_bad_gateway() {
    let source = serde_json::from_str::<Vec<i64>>("<html>").unwrap_err();
    let err = AppError::Upstream(PostgrestError::Decode {
        source,
        body: "<html>".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "BAD_UPSTREAM_RESPONSE");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn empty_representation_becomes_bad_gateway() {
    let err = AppError::Upstream(PostgrestError::EmptyRepresentation { table: "tags" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "BAD_UPSTREAM_RESPONSE");
}

#[tokio::test]
async fn client_config_error_is_internal() {
    let err = AppError::Upstream(PostgrestError::Config("bad key".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
