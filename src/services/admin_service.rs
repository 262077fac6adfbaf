//! Admin service
//!
//! Review queues and moderation actions. All callers are assumed to have
//! passed the admin role check in the handler layer.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{course_statuses, roles, tutor_statuses},
    db::repositories::{CourseRepository, UserRepository},
    error::{AppError, AppResult},
    models::{approval_flag, Course, User},
};

/// Admin service for review and moderation logic
pub struct AdminService;

impl AdminService {
    /// Tutor portfolios awaiting review, oldest submission first
    pub async fn pending_tutors(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list_pending_tutors(pool).await
    }

    /// Apply a review decision to a tutor portfolio
    pub async fn review_tutor(pool: &PgPool, tutor_id: &Uuid, decision: &str) -> AppResult<User> {
        if !tutor_statuses::DECISIONS.contains(&decision) {
            return Err(AppError::Validation(
                "Decision must be approved or rejected".to_string(),
            ));
        }

        let tutor = UserRepository::find_by_id(pool, tutor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tutor not found".to_string()))?;

        if tutor.role != roles::TUTOR {
            return Err(AppError::InvalidInput("User is not a tutor".to_string()));
        }

        let approved = decision == tutor_statuses::APPROVED;
        let updated = UserRepository::set_tutor_status(pool, tutor_id, decision, approved)
            .await?
            .ok_or_else(|| AppError::NotFound("Tutor not found".to_string()))?;

        tracing::info!(tutor_id = %tutor_id, decision = %decision, "Tutor portfolio reviewed");

        Ok(updated)
    }

    /// Courses awaiting review, oldest submission first
    pub async fn pending_courses(pool: &PgPool) -> AppResult<Vec<Course>> {
        CourseRepository::list_pending(pool).await
    }

    /// Apply a review decision to a course
    pub async fn review_course(
        pool: &PgPool,
        course_id: &Uuid,
        decision: &str,
    ) -> AppResult<Course> {
        if !course_statuses::DECISIONS.contains(&decision) {
            return Err(AppError::Validation(
                "Decision must be approved or rejected".to_string(),
            ));
        }

        let course = CourseRepository::set_status(pool, course_id, decision, approval_flag(decision))
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        tracing::info!(course_id = %course_id, decision = %decision, "Course reviewed");

        Ok(course)
    }

    /// All courses in every review state
    pub async fn all_courses(pool: &PgPool) -> AppResult<Vec<Course>> {
        CourseRepository::list_all(pool).await
    }

    /// All students and tutors
    pub async fn all_users(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list_non_admins(pool).await
    }

    /// Remove a user account. Admin accounts cannot be removed.
    pub async fn delete_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_admin() {
            return Err(AppError::Forbidden(
                "Admin accounts cannot be deleted".to_string(),
            ));
        }

        UserRepository::delete(pool, user_id).await?;

        tracing::info!(user_id = %user_id, role = %user.role, "User deleted");

        Ok(())
    }
}
