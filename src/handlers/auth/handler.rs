//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
    utils::validation::validate_registration_role,
};

use super::{
    request::{LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest},
    response::{
        AuthResponse, CurrentUserResponse, LogoutResponse, RefreshResponse, RegisterResponse,
        UserResponse,
    },
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;
    validate_registration_role(&payload.role)
        .map_err(|e| crate::error::AppError::Validation(e.to_string()))?;

    let user = AuthService::register(
        state.db(),
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.role,
    )
    .await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user: user.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, tokens) = AuthService::login(
        state.db(),
        state.redis(),
        state.config(),
        &payload.email,
        &payload.password,
    )
    .await?;

    let response = AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: tokens.expires_in,
        user: user.into(),
    };

    Ok(Json(response))
}

/// Refresh access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let tokens = AuthService::refresh_token(
        state.db(),
        state.redis(),
        state.config(),
        &payload.refresh_token,
    )
    .await?;

    let response = RefreshResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: tokens.expires_in,
    };

    Ok(Json(response))
}

/// Logout (invalidate refresh tokens)
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<Option<LogoutRequest>>,
) -> AppResult<Json<LogoutResponse>> {
    let all_sessions = payload.and_then(|p| p.all_sessions).unwrap_or(false);

    AuthService::logout(state.redis(), &auth_user.id, all_sessions).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::get_profile(state.db(), &auth_user.id).await?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}
