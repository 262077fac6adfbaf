//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{roles, tutor_statuses};

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// One of `roles::ALL`; immutable after creation
    pub role: String,

    // Gamification counters, mutated only by the grading engine
    pub xp: i32,
    pub level: i32,

    // Tutor portfolio
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub photo: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    /// One of `tutor_statuses::*`
    pub tutor_status: String,
    /// Mirrors `tutor_status == "approved"`
    pub is_approved_tutor: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if user is a student
    pub fn is_student(&self) -> bool {
        self.role == roles::USER
    }

    /// Check if user may author courses (approved tutor, or admin)
    pub fn can_create_courses(&self) -> bool {
        (self.role == roles::TUTOR && self.is_approved_tutor) || self.role == roles::ADMIN
    }

    /// Check if the tutor portfolio is awaiting review
    pub fn portfolio_pending(&self) -> bool {
        self.tutor_status == tutor_statuses::PENDING
    }
}
