//! Chat service
//!
//! Doubt chat between an enrolled student and a course's tutor. Messages
//! are persisted first; only then are they announced over the relay, so a
//! client that missed the live event can always reconcile from history.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{
        ChatRepository, CourseRepository, DoubtSummary, EnrollmentRepository,
    },
    error::{AppError, AppResult},
    models::ChatMessage,
    relay::{RelayEvent, RelayHub, RoomKey},
};

/// Chat service for business logic
pub struct ChatService;

impl ChatService {
    /// Persist a doubt message and announce it over the relay.
    ///
    /// Students may only message the tutor of a course they are enrolled
    /// in; tutors may only reply within their own courses.
    pub async fn send_message(
        pool: &PgPool,
        relay: &RelayHub,
        sender_id: &Uuid,
        sender_name: &str,
        sender_role: &str,
        recipient_id: &Uuid,
        course_id: &Uuid,
        message: &str,
    ) -> AppResult<ChatMessage> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let student_id = match sender_role {
            roles::USER => {
                if *recipient_id != course.tutor_id {
                    return Err(AppError::Forbidden(
                        "Doubts can only be sent to the course tutor".to_string(),
                    ));
                }
                if !EnrollmentRepository::exists(pool, sender_id, course_id).await? {
                    return Err(AppError::Forbidden(
                        "Enroll in the course before asking doubts".to_string(),
                    ));
                }
                *sender_id
            }
            roles::TUTOR => {
                if course.tutor_id != *sender_id {
                    return Err(AppError::Forbidden(
                        "Only the course tutor can reply here".to_string(),
                    ));
                }
                *recipient_id
            }
            _ => {
                return Err(AppError::Forbidden(
                    "Only students and tutors can use doubt chat".to_string(),
                ));
            }
        };

        let stored =
            ChatRepository::create(pool, sender_id, recipient_id, course_id, message).await?;

        // Durable write done; live delivery is best-effort from here
        let room = RoomKey {
            course_id: *course_id,
            student_id,
            tutor_id: course.tutor_id,
        };

        relay.publish_to_room(
            &room,
            RelayEvent::ReceiveDoubt {
                course_id: *course_id,
                student_id,
                tutor_id: course.tutor_id,
                sender_id: *sender_id,
                sender_name: sender_name.to_string(),
                message: message.to_string(),
            },
        );

        relay.notify_lobby(
            recipient_id,
            RelayEvent::NewMessageNotification {
                course_id: *course_id,
                sender_id: *sender_id,
                sender_name: sender_name.to_string(),
                message: message.to_string(),
            },
        );

        Ok(stored)
    }

    /// Conversation history with another user for one course, oldest first.
    ///
    /// The caller must be one of the two parties.
    pub async fn history(
        pool: &PgPool,
        caller_id: &Uuid,
        course_id: &Uuid,
        other_user_id: &Uuid,
    ) -> AppResult<Vec<ChatMessage>> {
        ChatRepository::conversation(pool, course_id, caller_id, other_user_id).await
    }

    /// A tutor's doubt inbox: the latest message per (student, course),
    /// most recent conversation first
    pub async fn tutor_doubts(pool: &PgPool, tutor_id: &Uuid) -> AppResult<Vec<DoubtSummary>> {
        let course_ids = CourseRepository::ids_by_tutor(pool, tutor_id).await?;
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        ChatRepository::tutor_doubts(pool, tutor_id, &course_ids).await
    }
}
