//! Course response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Course, CourseModule, User};

/// Tutor info shown alongside a course
#[derive(Debug, Serialize)]
pub struct CourseTutor {
    pub id: Uuid,
    pub name: String,
    pub specialization: Option<String>,
    pub photo: Option<String>,
}

impl From<User> for CourseTutor {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            specialization: user.specialization,
            photo: user.photo,
        }
    }
}

/// Catalogue entry: course metadata without module content
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub module_count: usize,
    pub tutor: Option<CourseTutor>,
    pub created_at: DateTime<Utc>,
}

impl CourseSummary {
    pub fn from_course(course: Course, tutor: Option<User>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            price: course.price,
            thumbnail: course.thumbnail,
            module_count: course.modules.0.len(),
            tutor: tutor.map(CourseTutor::from),
            created_at: course.created_at,
        }
    }
}

/// Full course detail; `modules` is present only when the caller may
/// view content (enrolled, owner or admin)
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub status: String,
    pub is_enrolled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<CourseModule>>,
    pub module_count: usize,
    pub tutor: Option<CourseTutor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tutor's own course with its enrollment count
#[derive(Debug, Serialize)]
pub struct MyCourseEntry {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub status: String,
    pub is_approved: bool,
    pub student_count: i64,
    pub updated_at: DateTime<Utc>,
}

/// Course list response
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

/// Tutor course list response
#[derive(Debug, Serialize)]
pub struct MyCoursesResponse {
    pub courses: Vec<MyCourseEntry>,
}

/// Course creation/update acknowledgement
#[derive(Debug, Serialize)]
pub struct CourseMutationResponse {
    pub message: String,
    pub course_id: Uuid,
    pub status: String,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
