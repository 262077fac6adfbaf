//! Resume response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Resume;

/// Listing entry: resume metadata only
#[derive(Debug, Serialize)]
pub struct ResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub template: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Resume> for ResumeSummary {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.id,
            title: resume.title,
            template: resume.template,
            updated_at: resume.updated_at,
        }
    }
}

/// Resume list response
#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

/// Mutation acknowledgement with the stored resume
#[derive(Debug, Serialize)]
pub struct ResumeMutationResponse {
    pub message: String,
    pub resume: Resume,
}
