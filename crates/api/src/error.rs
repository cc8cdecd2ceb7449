use axelin_core::error::CoreError;
use axelin_postgrest::PostgrestError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`PostgrestError`] for upstream
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `axelin_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call to the PostgREST backend.
    #[error(transparent)]
    Upstream(#[from] PostgrestError),

    /// A request the extractors could not read: malformed JSON body, path
    /// segment or query string. See [`crate::extract`].
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure inside the service, e.g. a handler panic. The
    /// message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
            },

            // --- Upstream errors ---
            AppError::Upstream(err) => classify_postgrest_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

type Classified = (StatusCode, &'static str, String, Option<serde_json::Value>);

fn internal() -> Classified {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

/// Classify an upstream failure into an HTTP status, error code, message and
/// optional details.
///
/// - Backend 4xx keep their status (e.g. 409 for a unique violation).
/// - Backend 5xx become 502.
/// - Timeouts become 504, other transport failures 502.
/// - Undecodable or empty representations become 502.
///
/// The backend's error body is passed through in `details`, as JSON when it
/// parses and as a string otherwise.
fn classify_postgrest_error(err: &PostgrestError) -> Classified {
    match err {
        PostgrestError::Upstream { status, body } => {
            let details = serde_json::from_str(body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone()));
            let status_code = StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status_code,
                "UPSTREAM_ERROR",
                format!("Upstream request failed with status {status}"),
                Some(details),
            )
        }
        PostgrestError::Transport(source) if source.is_timeout() => {
            tracing::error!(error = %source, "Upstream request timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "Upstream request timed out".to_string(),
                None,
            )
        }
        PostgrestError::Transport(source) => {
            tracing::error!(error = %source, "Upstream request failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                "Upstream service unavailable".to_string(),
                None,
            )
        }
        PostgrestError::Decode { .. } | PostgrestError::EmptyRepresentation { .. } => {
            tracing::error!(error = %err, "Unexpected upstream response");
            (
                StatusCode::BAD_GATEWAY,
                "BAD_UPSTREAM_RESPONSE",
                "Upstream returned an unexpected response".to_string(),
                None,
            )
        }
        PostgrestError::Config(msg) => {
            tracing::error!(error = %msg, "Upstream client misconfigured");
            internal()
        }
    }
}
