//! Chat message repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ChatMessage};

/// One student's latest doubt for a tutor's course
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct DoubtSummary {
    pub student_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub course_id: Uuid,
    pub course_title: String,
    pub last_message: String,
    pub last_timestamp: DateTime<Utc>,
}

/// Repository for chat message database operations
pub struct ChatRepository;

impl ChatRepository {
    /// Persist a message
    pub async fn create(
        pool: &PgPool,
        sender_id: &Uuid,
        recipient_id: &Uuid,
        course_id: &Uuid,
        message: &str,
    ) -> AppResult<ChatMessage> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_messages (sender_id, recipient_id, course_id, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(recipient_id)
        .bind(course_id)
        .bind(message)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Conversation history between two users for one course, oldest first
    pub async fn conversation(
        pool: &PgPool,
        course_id: &Uuid,
        user_a: &Uuid,
        user_b: &Uuid,
    ) -> AppResult<Vec<ChatMessage>> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            r#"
            SELECT * FROM chat_messages
            WHERE course_id = $1
              AND ((sender_id = $2 AND recipient_id = $3)
                OR (sender_id = $3 AND recipient_id = $2))
            ORDER BY created_at ASC
            "#,
        )
        .bind(course_id)
        .bind(user_a)
        .bind(user_b)
        .fetch_all(pool)
        .await?;

        Ok(messages)
    }

    /// Latest message per (student, course) addressed to the tutor,
    /// newest conversation first
    pub async fn tutor_doubts(
        pool: &PgPool,
        tutor_id: &Uuid,
        course_ids: &[Uuid],
    ) -> AppResult<Vec<DoubtSummary>> {
        let doubts = sqlx::query_as::<_, DoubtSummary>(
            r#"
            SELECT DISTINCT ON (m.sender_id, m.course_id)
                m.sender_id AS student_id,
                u.name AS student_name,
                u.email AS student_email,
                m.course_id,
                c.title AS course_title,
                m.message AS last_message,
                m.created_at AS last_timestamp
            FROM chat_messages m
            JOIN users u ON u.id = m.sender_id
            JOIN courses c ON c.id = m.course_id
            WHERE m.recipient_id = $1 AND m.course_id = ANY($2)
            ORDER BY m.sender_id, m.course_id, m.created_at DESC
            "#,
        )
        .bind(tutor_id)
        .bind(course_ids)
        .fetch_all(pool)
        .await?;

        // DISTINCT ON forces sender/course ordering; re-sort by recency
        let mut doubts = doubts;
        doubts.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));

        Ok(doubts)
    }
}
