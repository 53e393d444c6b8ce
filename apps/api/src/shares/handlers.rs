//! Axum route handlers for share snapshots.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::saved::SharedResume;
use crate::shares::service::share_url;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub name: Option<String>,
    pub data: ResumeData,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub share_id: String,
    pub url: String,
    pub snapshot: SharedResume,
}

impl PublishResponse {
    fn new(state: &AppState, snapshot: SharedResume) -> Self {
        Self {
            share_id: snapshot.share_id.clone(),
            url: share_url(&state.config.share_base_url, &snapshot.share_id),
            snapshot,
        }
    }
}

/// POST /api/v1/shares
pub async fn handle_publish(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    let snapshot = state
        .shares
        .publish(request.name.as_deref(), request.data)
        .await?;
    Ok((StatusCode::CREATED, Json(PublishResponse::new(&state, snapshot))))
}

/// POST /api/v1/resumes/:id/share
pub async fn handle_publish_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    let snapshot = state.shares.publish_draft(id).await?;
    Ok((StatusCode::CREATED, Json(PublishResponse::new(&state, snapshot))))
}

/// GET /api/v1/shares/:share_id
///
/// Read-only view of a published snapshot.
pub async fn handle_get_share(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
) -> Result<Json<SharedResume>, AppError> {
    Ok(Json(state.shares.get(&share_id).await?))
}
