//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    #[serde(default)]
    pub resume: ResumeData,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct GeneralRequest {
    #[serde(default)]
    pub resume: ResumeData,
}

/// POST /api/v1/analysis/ats
///
/// Scores the resume's keyword coverage against a target job description.
pub async fn handle_ats(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let result = state
        .analyzer
        .ats(&request.resume, &request.job_description)
        .await?;
    Ok(Json(result))
}

/// POST /api/v1/analysis/general
///
/// Scores overall resume quality from structural checks.
pub async fn handle_general(
    State(state): State<AppState>,
    Json(request): Json<GeneralRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    Ok(Json(state.analyzer.general(&request.resume).await))
}
