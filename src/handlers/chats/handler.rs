//! Chat handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ChatService,
    state::AppState,
};

use super::{
    request::SendMessageRequest,
    response::{DoubtsResponse, HistoryResponse, MessageResponse},
};

/// Persist a doubt message and announce it over the relay
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    payload.validate()?;

    let message = ChatService::send_message(
        state.db(),
        state.relay(),
        &auth_user.id,
        &auth_user.name,
        &auth_user.role,
        &payload.recipient_id,
        &payload.course_id,
        &payload.message,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Conversation history with another user for one course
pub async fn history(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((course_id, user_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<HistoryResponse>> {
    let messages = ChatService::history(state.db(), &auth_user.id, &course_id, &user_id).await?;

    Ok(Json(HistoryResponse {
        messages: messages.into_iter().map(Into::into).collect(),
    }))
}

/// The caller's doubt inbox (tutor view)
pub async fn tutor_doubts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<DoubtsResponse>> {
    let doubts = ChatService::tutor_doubts(state.db(), &auth_user.id).await?;

    Ok(Json(DoubtsResponse { doubts }))
}
