//! Request extractors that reject with the [`AppError`] JSON envelope.
//!
//! axum's own `Json`, `Path` and `Query` answer a malformed request with a
//! plain-text body. These wrappers convert the rejection into
//! `AppError::BadRequest`, so every 4xx carries `{error, code}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
