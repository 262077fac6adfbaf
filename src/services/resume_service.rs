//! Resume service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ResumeRepository, ResumeSections},
    error::{AppError, AppResult},
    models::Resume,
};

/// Resume service for owner-scoped CRUD
pub struct ResumeService;

impl ResumeService {
    /// Create a resume owned by the caller
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        title: &str,
        sections: ResumeSections<'_>,
        template: &str,
    ) -> AppResult<Resume> {
        let resume = ResumeRepository::create(pool, user_id, title, sections, template).await?;

        tracing::info!(resume_id = %resume.id, user_id = %user_id, "Resume created");

        Ok(resume)
    }

    /// Fetch one resume; only its owner may read it
    pub async fn get(pool: &PgPool, user_id: &Uuid, resume_id: &Uuid) -> AppResult<Resume> {
        let resume = ResumeRepository::find_by_id(pool, resume_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

        if resume.user_id != *user_id {
            // Hide other users' resumes entirely
            return Err(AppError::NotFound("Resume not found".to_string()));
        }

        Ok(resume)
    }

    /// The caller's resumes, newest first
    pub async fn list(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Resume>> {
        ResumeRepository::list_by_user(pool, user_id).await
    }

    /// Overwrite a resume; only its owner may edit it
    pub async fn update(
        pool: &PgPool,
        user_id: &Uuid,
        resume_id: &Uuid,
        title: &str,
        sections: ResumeSections<'_>,
        template: &str,
    ) -> AppResult<Resume> {
        // Ownership check doubles as the existence check
        Self::get(pool, user_id, resume_id).await?;

        ResumeRepository::update(pool, resume_id, title, sections, template).await
    }

    /// Delete a resume; only its owner may delete it
    pub async fn delete(pool: &PgPool, user_id: &Uuid, resume_id: &Uuid) -> AppResult<()> {
        Self::get(pool, user_id, resume_id).await?;

        ResumeRepository::delete(pool, resume_id).await?;

        tracing::info!(resume_id = %resume_id, user_id = %user_id, "Resume deleted");

        Ok(())
    }
}
