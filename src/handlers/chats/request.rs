//! Chat request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_CHAT_MESSAGE_LENGTH;

/// Send a doubt message
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub recipient_id: Uuid,
    pub course_id: Uuid,

    #[validate(length(min = 1, max = MAX_CHAT_MESSAGE_LENGTH))]
    pub message: String,
}
