//! Chat message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted chat message
///
/// The durable log behind the relay; history ordering is `created_at`
/// ascending within a (course, sender, recipient) conversation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub course_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
