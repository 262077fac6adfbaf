//! Chat response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{db::repositories::DoubtSummary, models::ChatMessage};

/// One persisted message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub course_id: Uuid,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl From<ChatMessage> for MessageResponse {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            sender_id: m.sender_id,
            recipient_id: m.recipient_id,
            course_id: m.course_id,
            message: m.message,
            sent_at: m.created_at,
        }
    }
}

/// Conversation history, oldest first
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageResponse>,
}

/// Tutor doubt inbox, most recent conversation first
#[derive(Debug, Serialize)]
pub struct DoubtsResponse {
    pub doubts: Vec<DoubtSummary>,
}
