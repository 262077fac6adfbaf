//! Resume handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::repositories::ResumeSections,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Resume,
    services::ResumeService,
    state::AppState,
};

use super::{
    request::ResumePayload,
    response::{ResumeListResponse, ResumeMutationResponse},
};

fn sections(payload: &ResumePayload) -> ResumeSections<'_> {
    ResumeSections {
        personal: &payload.personal,
        experience: &payload.experience,
        education: &payload.education,
        skills: &payload.skills,
        projects: &payload.projects,
        certificates: &payload.certificates,
    }
}

/// Create a resume
pub async fn create_resume(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ResumePayload>,
) -> AppResult<(StatusCode, Json<ResumeMutationResponse>)> {
    payload.validate()?;

    let resume = ResumeService::create(
        state.db(),
        &auth_user.id,
        &payload.title,
        sections(&payload),
        &payload.template,
    )
    .await?;

    let response = ResumeMutationResponse {
        message: "Resume created".to_string(),
        resume,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// The caller's resumes
pub async fn list_resumes(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ResumeListResponse>> {
    let resumes = ResumeService::list(state.db(), &auth_user.id).await?;

    Ok(Json(ResumeListResponse {
        resumes: resumes.into_iter().map(Into::into).collect(),
    }))
}

/// One resume with all sections
pub async fn get_resume(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Resume>> {
    let resume = ResumeService::get(state.db(), &auth_user.id, &id).await?;

    Ok(Json(resume))
}

/// Replace a resume's content
pub async fn update_resume(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResumePayload>,
) -> AppResult<Json<ResumeMutationResponse>> {
    payload.validate()?;

    let resume = ResumeService::update(
        state.db(),
        &auth_user.id,
        &id,
        &payload.title,
        sections(&payload),
        &payload.template,
    )
    .await?;

    Ok(Json(ResumeMutationResponse {
        message: "Resume updated".to_string(),
        resume,
    }))
}

/// Delete a resume
pub async fn delete_resume(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ResumeService::delete(state.db(), &auth_user.id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
