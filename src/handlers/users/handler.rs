//! User handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::UpdatePortfolioRequest,
    response::{
        LeaderboardEntry, LeaderboardResponse, PortfolioResponse, TutorProfileResponse,
        XpStatsResponse,
    },
};

/// Update the caller's tutor portfolio
pub async fn update_portfolio(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdatePortfolioRequest>,
) -> AppResult<Json<PortfolioResponse>> {
    payload.validate()?;

    let user = UserService::update_portfolio(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        payload.bio.as_deref(),
        payload.specialization.as_deref(),
        payload.photo.as_deref(),
        payload.experience.as_deref(),
        payload.qualification.as_deref(),
    )
    .await?;

    Ok(Json(PortfolioResponse {
        message: "Portfolio updated and submitted for review".to_string(),
        tutor_status: user.tutor_status.clone(),
        profile: user.into(),
    }))
}

/// Public tutor profile
pub async fn tutor_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TutorProfileResponse>> {
    let tutor = UserService::get_tutor_profile(state.db(), &id).await?;

    Ok(Json(tutor.into()))
}

/// Top students by level and XP
pub async fn leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let users = UserService::leaderboard(state.db()).await?;

    let leaderboard = users
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardEntry {
            rank: i + 1,
            name: user.name,
            xp: user.xp,
            level: user.level,
            member_since: user.created_at,
        })
        .collect();

    Ok(Json(LeaderboardResponse { leaderboard }))
}

/// XP progress for the caller
pub async fn xp_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<XpStatsResponse>> {
    let stats = UserService::xp_stats(state.db(), &auth_user.id).await?;

    Ok(Json(XpStatsResponse {
        xp: stats.xp,
        level: stats.level,
        xp_to_next_level: stats.xp_to_next_level,
    }))
}
