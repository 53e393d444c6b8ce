//! Axum route handlers for saved resume drafts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::saved::SavedResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    pub name: String,
    #[serde(default)]
    pub data: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub name: Option<String>,
    pub data: ResumeData,
}

/// GET /api/v1/resumes
pub async fn handle_list_drafts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedResume>>, AppError> {
    Ok(Json(state.drafts.list().await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_draft(
    State(state): State<AppState>,
    Json(request): Json<CreateDraftRequest>,
) -> Result<(StatusCode, Json<SavedResume>), AppError> {
    let draft = state.drafts.create(&request.name, request.data).await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedResume>, AppError> {
    Ok(Json(state.drafts.get(id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDraftRequest>,
) -> Result<Json<SavedResume>, AppError> {
    let draft = state
        .drafts
        .update(id, request.name.as_deref(), request.data)
        .await?;
    Ok(Json(draft))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.drafts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
