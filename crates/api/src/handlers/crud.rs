//! Generic CRUD handlers shared by every resource.
//!
//! Each handler is instantiated per repository in the route modules, e.g.
//! `get(crud::list::<TagRepo>)`. One inbound request is one upstream call.

use axelin_core::error::CoreError;
use axelin_core::validation::Validate;
use axelin_postgrest::Resource;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// A [`Resource`] whose types can cross the HTTP boundary.
pub trait ApiResource:
    Resource<
        Id: DeserializeOwned + 'static,
        Row: Serialize + 'static,
        Create: DeserializeOwned + Validate + 'static,
        Update: DeserializeOwned + Validate + 'static,
    > + Send
    + Sync
    + 'static
{
}

impl<R> ApiResource for R where
    R: Resource<
            Id: DeserializeOwned + 'static,
            Row: Serialize + 'static,
            Create: DeserializeOwned + Validate + 'static,
            Update: DeserializeOwned + Validate + 'static,
        > + Send
        + Sync
        + 'static
{
}

/// GET /api/{resource}
pub async fn list<R: ApiResource>(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = state.proxy::<R>().list().await?;

    Ok(Json(rows))
}

/// GET /api/{resource}/{id}
///
/// An empty upstream result is a 404, not an error.
pub async fn get<R: ApiResource>(
    State(state): State<AppState>,
    AppPath(id): AppPath<R::Id>,
) -> AppResult<impl IntoResponse> {
    let row = state
        .proxy::<R>()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(R::ENTITY, &id)))?;

    Ok(Json(row))
}

/// POST /api/{resource}
pub async fn create<R: ApiResource>(
    State(state): State<AppState>,
    AppJson(input): AppJson<R::Create>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let row = state.proxy::<R>().create(&input).await?;

    tracing::info!(entity = R::ENTITY, "Entity created");

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/{resource}/{id}
///
/// Forwarded as a partial PATCH; fields absent from the body are unchanged.
pub async fn update<R: ApiResource>(
    State(state): State<AppState>,
    AppPath(id): AppPath<R::Id>,
    AppJson(input): AppJson<R::Update>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let row = state
        .proxy::<R>()
        .update(&id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found(R::ENTITY, &id)))?;

    tracing::info!(entity = R::ENTITY, %id, "Entity updated");

    Ok(Json(row))
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R: ApiResource>(
    State(state): State<AppState>,
    AppPath(id): AppPath<R::Id>,
) -> AppResult<impl IntoResponse> {
    state.proxy::<R>().delete(&id).await?;

    tracing::info!(entity = R::ENTITY, %id, "Entity deleted");

    Ok(StatusCode::NO_CONTENT)
}
