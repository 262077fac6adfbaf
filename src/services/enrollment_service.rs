//! Enrollment service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{CourseRepository, EnrollmentRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Course, Enrollment, User},
};

/// An enrollment joined with its course
#[derive(Debug)]
pub struct EnrollmentWithCourse {
    pub enrollment: Enrollment,
    pub course: Option<Course>,
}

/// A student enrolled in one of a tutor's courses
#[derive(Debug)]
pub struct EnrolledStudent {
    pub enrollment: Enrollment,
    pub student: Option<User>,
    pub course: Option<Course>,
}

/// Enrollment service for business logic
pub struct EnrollmentService;

impl EnrollmentService {
    /// Enroll a student in a free course directly.
    ///
    /// Paid courses must go through the payment flow instead.
    pub async fn enroll_free(
        pool: &PgPool,
        user_id: &Uuid,
        role: &str,
        course_id: &Uuid,
    ) -> AppResult<Enrollment> {
        if role != roles::USER {
            return Err(AppError::Forbidden("Only students can enroll".to_string()));
        }

        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_approved {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        if course.price > 0.0 {
            return Err(AppError::InvalidInput(
                "This course requires payment".to_string(),
            ));
        }

        if EnrollmentRepository::exists(pool, user_id, course_id).await? {
            return Err(AppError::Conflict(
                "Already enrolled in this course".to_string(),
            ));
        }

        let enrollment = EnrollmentRepository::create(pool, user_id, course_id).await?;

        tracing::info!(user_id = %user_id, course_id = %course_id, "Free enrollment created");

        Ok(enrollment)
    }

    /// Check whether the caller is enrolled in a course
    pub async fn is_enrolled(pool: &PgPool, user_id: &Uuid, course_id: &Uuid) -> AppResult<bool> {
        EnrollmentRepository::exists(pool, user_id, course_id).await
    }

    /// The caller's enrollments with course details, newest first
    pub async fn my_enrollments(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<EnrollmentWithCourse>> {
        let enrollments = EnrollmentRepository::list_by_user(pool, user_id).await?;

        let mut entries = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = CourseRepository::find_by_id(pool, &enrollment.course_id).await?;
            entries.push(EnrollmentWithCourse { enrollment, course });
        }

        Ok(entries)
    }

    /// Students enrolled across all of a tutor's courses, newest first
    pub async fn tutor_students(
        pool: &PgPool,
        tutor_id: &Uuid,
    ) -> AppResult<Vec<EnrolledStudent>> {
        let course_ids = CourseRepository::ids_by_tutor(pool, tutor_id).await?;
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let enrollments = EnrollmentRepository::list_by_courses(pool, &course_ids).await?;

        let mut entries = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let student = UserRepository::find_by_id(pool, &enrollment.user_id).await?;
            let course = CourseRepository::find_by_id(pool, &enrollment.course_id).await?;
            entries.push(EnrolledStudent {
                enrollment,
                student,
                course,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn test_enroll_free_rejects_duplicate() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let student = test_utils::seed_student(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 0.0).await;

        EnrollmentService::enroll_free(&pool, &student.id, &student.role, &course.id)
            .await
            .unwrap();

        let err = EnrollmentService::enroll_free(&pool, &student.id, &student.role, &course.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let enrolled = EnrollmentRepository::count_for_course(&pool, &course.id)
            .await
            .unwrap();
        assert_eq!(enrolled, 1);
    }

    #[tokio::test]
    async fn test_enroll_free_rejects_paid_course() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let student = test_utils::seed_student(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 499.0).await;

        let err = EnrollmentService::enroll_free(&pool, &student.id, &student.role, &course.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_blocked_by_constraint() {
        let pool = test_utils::test_pool().await;
        let tutor = test_utils::seed_tutor(&pool).await;
        let student = test_utils::seed_student(&pool).await;
        let course = test_utils::seed_approved_course(&pool, &tutor.id, 0.0).await;

        EnrollmentRepository::create(&pool, &student.id, &course.id)
            .await
            .unwrap();

        // Even bypassing the service-level exists() check, the unique
        // constraint keeps the table at one row per (user, course)
        let err = EnrollmentRepository::create(&pool, &student.id, &course.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }
}
