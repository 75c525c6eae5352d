//! Skill detection endpoints.
//!
//! POST /predict-skills          — labels detected in a description
//! POST /predict-skills/explain  — labels plus every rule firing
//! GET  /skills                  — the canonical vocabulary

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::AppError;
use crate::matcher::{self, Detection};
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct DescriptionRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub skills: Vec<&'static str>,
    pub detections: Vec<Detection>,
}

#[instrument(skip_all)]
pub async fn predict_skills(
    State(state): State<AppState>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Result<Json<SkillsResponse>, AppError> {
    let Json(request) = payload?;
    let skills = state.matcher.predict(&request.description);
    Ok(Json(SkillsResponse {
        skills: skills.into_iter().collect(),
    }))
}

#[instrument(skip_all)]
pub async fn explain_skills(
    State(state): State<AppState>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, AppError> {
    let Json(request) = payload?;
    let detections = state.matcher.detect(&request.description);
    let skills = matcher::labels(&detections).into_iter().collect();
    Ok(Json(ExplainResponse { skills, detections }))
}

#[instrument(skip_all)]
pub async fn list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.matcher.vocabulary().to_vec(),
    })
}
