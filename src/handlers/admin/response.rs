//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Course, User};

/// A tutor portfolio awaiting review
#[derive(Debug, Serialize)]
pub struct PendingTutorEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<User> for PendingTutorEntry {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            bio: user.bio,
            specialization: user.specialization,
            experience: user.experience,
            qualification: user.qualification,
            submitted_at: user.updated_at,
        }
    }
}

/// Pending tutors response
#[derive(Debug, Serialize)]
pub struct PendingTutorsResponse {
    pub tutors: Vec<PendingTutorEntry>,
}

/// Review decision acknowledgement
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: String,
    pub id: Uuid,
    pub status: String,
}

/// A course row in the admin views
#[derive(Debug, Serialize)]
pub struct AdminCourseEntry {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub title: String,
    pub price: f64,
    pub status: String,
    pub is_approved: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for AdminCourseEntry {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            tutor_id: course.tutor_id,
            title: course.title,
            price: course.price,
            status: course.status,
            is_approved: course.is_approved,
            updated_at: course.updated_at,
        }
    }
}

/// Course list response (admin views)
#[derive(Debug, Serialize)]
pub struct AdminCoursesResponse {
    pub courses: Vec<AdminCourseEntry>,
}

/// A user row in the admin listing
#[derive(Debug, Serialize)]
pub struct AdminUserEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub xp: i32,
    pub level: i32,
    pub tutor_status: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserEntry {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            xp: user.xp,
            level: user.level,
            tutor_status: user.tutor_status,
            created_at: user.created_at,
        }
    }
}

/// User list response
#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserEntry>,
}
