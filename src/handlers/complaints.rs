use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{authorize_admin, AuthUser};
use crate::models::complaint::{is_resolved_status, Complaint};
use crate::state::AppState;

/// POST /api/complaints - file a new complaint
pub async fn create(
    State(state): State<AppState>,
    Json(complaint): Json<Complaint>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.complaints.create(complaint).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/complaints - list all complaints
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let all = state.complaints.list_all().await?;
    Ok(Json(all))
}

/// GET /api/complaints/:id - fetch one complaint by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.complaints.get_by_id(id).await? {
        Some(complaint) => Ok(Json(complaint)),
        None => Err(ApiError::not_found(format!(
            "Complaint not found with ID: {}",
            id
        ))),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    pub status: Option<String>,
}

/// PUT /api/complaints/:id?status=X - overwrite the status field.
///
/// Transitions into a resolved state are ADMIN-only; any other status string
/// is open, matching the rest of the complaint endpoints.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdateQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let status = query
        .status
        .ok_or_else(|| ApiError::bad_request("status query parameter is required"))?;

    if is_resolved_status(&status) {
        authorize_admin(&headers)?;
    }

    let updated = state.complaints.update_status(id, &status).await?;
    Ok(Json(updated))
}

/// PUT /api/complaints/:id/resolve - mark a complaint RESOLVED.
/// Routed behind the JWT middleware; the role check happens here.
pub async fn resolve(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !user.is_admin() {
        return Err(ApiError::forbidden("ADMIN role required"));
    }

    let updated = state.complaints.update_status(id, "RESOLVED").await?;
    tracing::info!("complaint {} resolved by {}", id, user.username);
    Ok(Json(updated))
}

/// DELETE /api/complaints/:id - always 204, even for ids that never existed
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.complaints.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
