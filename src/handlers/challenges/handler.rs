//! Challenge handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ChallengeService,
    state::AppState,
    utils::validation::{validate_language, validate_source_code},
};

use super::{
    request::SubmitRequest,
    response::{ChallengeDetailResponse, ChallengeListResponse, SubmissionOutcome},
};

/// List all challenges (test cases omitted)
pub async fn list_challenges(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<ChallengeListResponse>> {
    let challenges = ChallengeService::list_challenges(state.db()).await?;

    Ok(Json(ChallengeListResponse {
        challenges: challenges.into_iter().map(Into::into).collect(),
    }))
}

/// One challenge with its starter code and test cases
pub async fn get_challenge(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ChallengeDetailResponse>> {
    let challenge = ChallengeService::get_challenge(state.db(), &id).await?;

    Ok(Json(challenge.into()))
}

/// Submit code for grading
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmissionOutcome>> {
    payload.validate()?;
    validate_language(&payload.language).map_err(|e| AppError::Validation(e.to_string()))?;
    validate_source_code(&payload.code).map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = ChallengeService::submit(
        state.db(),
        state.judge().as_ref(),
        &auth_user,
        &id,
        &payload.code,
        &payload.language,
    )
    .await?;

    Ok(Json(outcome))
}
