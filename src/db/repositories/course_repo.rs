//! Course repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Course, CourseModule},
};

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course (enters review as pending)
    pub async fn create(
        pool: &PgPool,
        tutor_id: &Uuid,
        title: &str,
        description: &str,
        price: f64,
        thumbnail: Option<&str>,
        modules: &[CourseModule],
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (tutor_id, title, description, price, thumbnail, modules)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(tutor_id)
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(thumbnail)
        .bind(sqlx::types::Json(modules))
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    /// Courses visible in the student-facing catalogue
    pub async fn list_approved(pool: &PgPool) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT * FROM courses WHERE is_approved = TRUE ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }

    /// Courses owned by a tutor
    pub async fn list_by_tutor(pool: &PgPool, tutor_id: &Uuid) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT * FROM courses WHERE tutor_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(tutor_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }

    /// Course IDs owned by a tutor
    pub async fn ids_by_tutor(pool: &PgPool, tutor_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM courses WHERE tutor_id = $1"#)
                .bind(tutor_id)
                .fetch_all(pool)
                .await?;

        Ok(ids)
    }

    /// Courses awaiting admin review
    pub async fn list_pending(pool: &PgPool) -> AppResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT * FROM courses WHERE status = 'pending' ORDER BY updated_at ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }

    /// All courses (admin view)
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Course>> {
        let courses =
            sqlx::query_as::<_, Course>(r#"SELECT * FROM courses ORDER BY created_at DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(courses)
    }

    /// Overwrite course content; resets the review state to pending
    pub async fn update_content(
        pool: &PgPool,
        id: &Uuid,
        title: &str,
        description: &str,
        price: f64,
        thumbnail: Option<&str>,
        modules: &[CourseModule],
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = $2,
                description = $3,
                price = $4,
                thumbnail = $5,
                modules = $6,
                status = 'pending',
                is_approved = FALSE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(thumbnail)
        .bind(sqlx::types::Json(modules))
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Apply an admin review decision
    pub async fn set_status(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
        is_approved: bool,
    ) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET status = $2, is_approved = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(is_approved)
        .fetch_optional(pool)
        .await?;

        Ok(course)
    }

    /// Delete a course
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::course_statuses, test_utils};

    #[tokio::test]
    async fn test_update_content_resets_review_state() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 0.0).await;
        assert!(course.is_approved);

        let updated = CourseRepository::update_content(
            &pool,
            &course.id,
            "Revised title",
            "Revised description",
            0.0,
            None,
            &course.modules.0,
        )
        .await
        .unwrap();

        // Edited content goes back through the review queue
        assert_eq!(updated.status, course_statuses::PENDING);
        assert!(!updated.is_approved);
    }
}
