use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::RoleProfile;
use crate::errors::AppError;
use crate::parsing::handlers::read_upload;
use crate::parsing::resume::parse_document;
use crate::scoring::analysis::{analyze_parsed, ResumeAnalysis};
use crate::scoring::ats::{score_ats, AtsReport};
use crate::scoring::classifier::Classification;
use crate::scoring::skill_gap::{analyze_skill_gap, SkillGapReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classifications: Vec<Classification>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub role: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleProfile>,
}

/// POST /classify_resume
pub async fn handle_classify_resume(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let classifications = state
        .role_index
        .classify(&req.text, state.embedder.as_ref())
        .await?;
    Ok(Json(ClassifyResponse { classifications }))
}

/// POST /skill_gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let report = analyze_skill_gap(&state.catalog, &req.role, &req.skills)?;
    Ok(Json(report))
}

/// POST /ats_score
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(req): Json<AtsRequest>,
) -> Json<AtsReport> {
    Json(score_ats(
        &req.resume_text,
        &req.job_description,
        &state.catalog.stopwords,
    ))
}

/// GET /roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles.clone(),
    })
}

/// POST /analyze_resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let upload = read_upload(multipart).await?;
    let parsed = parse_document(
        upload.bytes,
        upload.filename.as_deref(),
        upload.content_type.as_deref(),
        &state.catalog,
    )
    .await?;
    let analysis = analyze_parsed(
        parsed,
        upload.job_description.as_deref(),
        &state.catalog,
        &state.role_index,
        state.embedder.as_ref(),
    )
    .await?;
    Ok(Json(analysis))
}
