//! Enrollment repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Enrollment};

/// Repository for enrollment database operations
pub struct EnrollmentRepository;

impl EnrollmentRepository {
    /// Create an enrollment.
    ///
    /// Takes any executor so payment verification can run this inside the
    /// same transaction that completes the purchase.
    pub async fn create<'e, E>(
        executor: E,
        user_id: &Uuid,
        course_id: &Uuid,
    ) -> AppResult<Enrollment>
    where
        E: PgExecutor<'e>,
    {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (user_id, course_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(executor)
        .await?;

        Ok(enrollment)
    }

    /// Check whether a (user, course) enrollment exists
    pub async fn exists(pool: &PgPool, user_id: &Uuid, course_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = $1 AND course_id = $2)"#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Enrollments for one user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"SELECT * FROM enrollments WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(enrollments)
    }

    /// Enrollments across a set of courses, newest first
    pub async fn list_by_courses(
        pool: &PgPool,
        course_ids: &[Uuid],
    ) -> AppResult<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"SELECT * FROM enrollments WHERE course_id = ANY($1) ORDER BY created_at DESC"#,
        )
        .bind(course_ids)
        .fetch_all(pool)
        .await?;

        Ok(enrollments)
    }

    /// Number of students enrolled in a course
    pub async fn count_for_course(pool: &PgPool, course_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM enrollments WHERE course_id = $1"#)
                .bind(course_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
