//! Enrollment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Enrollment acknowledgement
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub message: String,
    pub enrollment_id: Uuid,
    pub course_id: Uuid,
}

/// One of the caller's enrollments with course info
#[derive(Debug, Serialize)]
pub struct MyEnrollmentEntry {
    pub enrollment_id: Uuid,
    pub course_id: Uuid,
    pub course_title: Option<String>,
    pub course_thumbnail: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

/// Caller's enrollments response
#[derive(Debug, Serialize)]
pub struct MyEnrollmentsResponse {
    pub enrollments: Vec<MyEnrollmentEntry>,
}

/// A student enrolled in one of the caller's courses
#[derive(Debug, Serialize)]
pub struct EnrolledStudentEntry {
    pub student_id: Uuid,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub course_id: Uuid,
    pub course_title: Option<String>,
    pub enrolled_at: DateTime<Utc>,
}

/// Tutor's enrolled students response
#[derive(Debug, Serialize)]
pub struct TutorStudentsResponse {
    pub students: Vec<EnrolledStudentEntry>,
}

/// Enrollment check response
#[derive(Debug, Serialize)]
pub struct EnrollmentCheckResponse {
    pub course_id: Uuid,
    pub is_enrolled: bool,
}
