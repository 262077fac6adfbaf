//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::course_statuses;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: Option<String>,
    /// Curriculum stored as JSON: array of [`CourseModule`]
    pub modules: sqlx::types::Json<Vec<CourseModule>>,
    /// One of `course_statuses::*`
    pub status: String,
    /// Mirrors `status == "approved"`; gates the student-facing listing
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A curriculum section within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A single lesson within a module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Course {
    /// Check whether the course is visible in the student-facing catalogue
    pub fn is_visible_to_students(&self) -> bool {
        self.is_approved
    }

    /// Check whether the given user owns this course
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.tutor_id == *user_id
    }
}

/// Drop modules and lessons with blank titles before persisting.
///
/// Mirrors the tutor-side editor which submits placeholder rows.
pub fn clean_modules(modules: Vec<CourseModule>) -> Vec<CourseModule> {
    modules
        .into_iter()
        .filter(|m| !m.title.trim().is_empty())
        .map(|mut m| {
            m.lessons.retain(|l| !l.title.trim().is_empty());
            m
        })
        .collect()
}

/// Map an admin review decision onto the approval flag
pub fn approval_flag(status: &str) -> bool {
    status == course_statuses::APPROVED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(title: &str, lessons: &[&str]) -> CourseModule {
        CourseModule {
            title: title.to_string(),
            lessons: lessons
                .iter()
                .map(|t| Lesson {
                    title: t.to_string(),
                    content: None,
                    video_url: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_clean_modules_drops_blank_titles() {
        let cleaned = clean_modules(vec![
            module("Intro", &["Welcome", "", "  "]),
            module("", &["Orphan"]),
            module("  ", &[]),
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].title, "Intro");
        assert_eq!(cleaned[0].lessons.len(), 1);
        assert_eq!(cleaned[0].lessons[0].title, "Welcome");
    }

    #[test]
    fn test_approval_flag_lockstep() {
        assert!(approval_flag("approved"));
        assert!(!approval_flag("rejected"));
        assert!(!approval_flag("pending"));
    }
}
