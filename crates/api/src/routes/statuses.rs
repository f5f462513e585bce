//! Per-user country status endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use status_store::{CountryStatusMap, StatusEntry, StatusStore, UserId};

use crate::error::ApiError;
use crate::extract::JsonBody;

/// Shared application state accessible from all handlers.
pub struct AppState<S: StatusStore> {
    pub store: S,
}

// -- Request types --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatusRequest {
    pub iso_code: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct StatusChangedResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub entry: StatusEntry,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// -- Handlers --

/// GET /api/statuses/{user_id} — all statuses for a user, `{}` if none.
#[tracing::instrument(skip(state))]
pub async fn list<S: StatusStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(user_id): Path<String>,
) -> Json<CountryStatusMap> {
    Json(state.store.get_statuses(&UserId::from(user_id)).await)
}

/// POST /api/statuses/{user_id} — add a status for a new country.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: StatusStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(user_id): Path<String>,
    JsonBody(req): JsonBody<CreateStatusRequest>,
) -> Result<(StatusCode, Json<StatusChangedResponse>), ApiError> {
    let entry = state
        .store
        .create_status(
            &UserId::from(user_id),
            req.iso_code.as_deref().unwrap_or_default(),
            req.status.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StatusChangedResponse {
            message: "Status added",
            entry,
        }),
    ))
}

/// PUT /api/statuses/{user_id}/{iso_code} — replace an existing status.
///
/// Without a `status` field the entry's status is cleared, which hides it
/// from reads and later writes, and the response carries no `status`.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: StatusStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((user_id, iso_code)): Path<(String, String)>,
    JsonBody(req): JsonBody<UpdateStatusRequest>,
) -> Result<Json<StatusChangedResponse>, ApiError> {
    let entry = state
        .store
        .update_status(
            &UserId::from(user_id),
            &iso_code,
            req.status.as_deref(),
        )
        .await?;

    Ok(Json(StatusChangedResponse {
        message: "Status updated",
        entry,
    }))
}

/// DELETE /api/statuses/{user_id}/{iso_code} — remove a status.
#[tracing::instrument(skip(state))]
pub async fn remove<S: StatusStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((user_id, iso_code)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store
        .delete_status(&UserId::from(user_id), &iso_code)
        .await?;

    Ok(Json(MessageResponse {
        message: "Status removed",
    }))
}
