//! Course service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{CourseRepository, EnrollmentRepository, UserRepository},
    error::{AppError, AppResult},
    models::{clean_modules, Course, CourseModule, User},
};

/// A catalogue entry paired with its tutor's public info
#[derive(Debug)]
pub struct CourseWithTutor {
    pub course: Course,
    pub tutor: Option<User>,
}

/// A tutor-owned course paired with its enrollment count
#[derive(Debug)]
pub struct CourseWithStudents {
    pub course: Course,
    pub student_count: i64,
}

/// How much of a course the caller is allowed to see
#[derive(Debug)]
pub struct CourseAccess {
    pub course: Course,
    pub tutor: Option<User>,
    /// Full module content is only shown when true
    pub can_view_content: bool,
    pub is_enrolled: bool,
}

/// Course service for authoring and catalogue logic
pub struct CourseService;

impl CourseService {
    /// Create a course; it enters review as pending
    pub async fn create_course(
        pool: &PgPool,
        tutor_id: &Uuid,
        title: &str,
        description: &str,
        price: f64,
        thumbnail: Option<&str>,
        modules: Vec<CourseModule>,
    ) -> AppResult<Course> {
        let tutor = UserRepository::find_by_id(pool, tutor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !tutor.can_create_courses() {
            return Err(AppError::Forbidden(
                "Only approved tutors can create courses".to_string(),
            ));
        }

        let modules = clean_modules(modules);

        let course = CourseRepository::create(
            pool,
            tutor_id,
            title,
            description,
            price,
            thumbnail,
            &modules,
        )
        .await?;

        tracing::info!(course_id = %course.id, tutor_id = %tutor_id, "Course created, awaiting review");

        Ok(course)
    }

    /// Student-facing catalogue: approved courses with tutor info
    pub async fn list_catalogue(pool: &PgPool) -> AppResult<Vec<CourseWithTutor>> {
        let courses = CourseRepository::list_approved(pool).await?;

        let mut entries = Vec::with_capacity(courses.len());
        for course in courses {
            let tutor = UserRepository::find_by_id(pool, &course.tutor_id).await?;
            entries.push(CourseWithTutor { course, tutor });
        }

        Ok(entries)
    }

    /// A tutor's own courses with enrollment counts, all review states included
    pub async fn my_courses(pool: &PgPool, tutor_id: &Uuid) -> AppResult<Vec<CourseWithStudents>> {
        let courses = CourseRepository::list_by_tutor(pool, tutor_id).await?;

        let mut entries = Vec::with_capacity(courses.len());
        for course in courses {
            let student_count = EnrollmentRepository::count_for_course(pool, &course.id).await?;
            entries.push(CourseWithStudents {
                course,
                student_count,
            });
        }

        Ok(entries)
    }

    /// Fetch one course, enforcing visibility.
    ///
    /// Unapproved courses are visible only to their owner and admins.
    /// Module content is gated behind enrollment (or ownership/admin).
    pub async fn get_course(
        pool: &PgPool,
        course_id: &Uuid,
        caller_id: &Uuid,
        caller_role: &str,
    ) -> AppResult<CourseAccess> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let is_owner = course.is_owned_by(caller_id);
        let is_admin = caller_role == roles::ADMIN;

        if !course.is_visible_to_students() && !is_owner && !is_admin {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        let is_enrolled = EnrollmentRepository::exists(pool, caller_id, course_id).await?;
        let tutor = UserRepository::find_by_id(pool, &course.tutor_id).await?;

        Ok(CourseAccess {
            can_view_content: is_enrolled || is_owner || is_admin,
            is_enrolled,
            course,
            tutor,
        })
    }

    /// Overwrite course content (owner only).
    ///
    /// Any edit sends the course back through admin review.
    pub async fn update_course(
        pool: &PgPool,
        course_id: &Uuid,
        caller_id: &Uuid,
        title: &str,
        description: &str,
        price: f64,
        thumbnail: Option<&str>,
        modules: Vec<CourseModule>,
    ) -> AppResult<Course> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_owned_by(caller_id) {
            return Err(AppError::Forbidden(
                "Only the course owner can edit it".to_string(),
            ));
        }

        let modules = clean_modules(modules);

        let updated = CourseRepository::update_content(
            pool,
            course_id,
            title,
            description,
            price,
            thumbnail,
            &modules,
        )
        .await?;

        tracing::info!(course_id = %course_id, "Course updated, review state reset to pending");

        Ok(updated)
    }

    /// Delete a course (owner or admin)
    pub async fn delete_course(
        pool: &PgPool,
        course_id: &Uuid,
        caller_id: &Uuid,
        caller_role: &str,
    ) -> AppResult<()> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if !course.is_owned_by(caller_id) && caller_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only the course owner or an admin can delete it".to_string(),
            ));
        }

        CourseRepository::delete(pool, course_id).await?;

        tracing::info!(course_id = %course_id, "Course deleted");

        Ok(())
    }
}
