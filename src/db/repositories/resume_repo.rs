//! Resume repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        CertificateEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Resume,
    },
};

/// Resume section payloads bundled for create/update calls
pub struct ResumeSections<'a> {
    pub personal: &'a PersonalInfo,
    pub experience: &'a [ExperienceEntry],
    pub education: &'a [EducationEntry],
    pub skills: &'a [String],
    pub projects: &'a [ProjectEntry],
    pub certificates: &'a [CertificateEntry],
}

/// Repository for resume database operations
pub struct ResumeRepository;

impl ResumeRepository {
    /// Create a resume
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        title: &str,
        sections: ResumeSections<'_>,
        template: &str,
    ) -> AppResult<Resume> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes
                (user_id, title, personal, experience, education, skills, projects, certificates, template)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(sqlx::types::Json(sections.personal))
        .bind(sqlx::types::Json(sections.experience))
        .bind(sqlx::types::Json(sections.education))
        .bind(sqlx::types::Json(sections.skills))
        .bind(sqlx::types::Json(sections.projects))
        .bind(sqlx::types::Json(sections.certificates))
        .bind(template)
        .fetch_one(pool)
        .await?;

        Ok(resume)
    }

    /// Find resume by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(r#"SELECT * FROM resumes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(resume)
    }

    /// Resumes owned by a user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Resume>> {
        let resumes = sqlx::query_as::<_, Resume>(
            r#"SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(resumes)
    }

    /// Overwrite a resume's content
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: &str,
        sections: ResumeSections<'_>,
        template: &str,
    ) -> AppResult<Resume> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            UPDATE resumes
            SET
                title = $2,
                personal = $3,
                experience = $4,
                education = $5,
                skills = $6,
                projects = $7,
                certificates = $8,
                template = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(sqlx::types::Json(sections.personal))
        .bind(sqlx::types::Json(sections.experience))
        .bind(sqlx::types::Json(sections.education))
        .bind(sqlx::types::Json(sections.skills))
        .bind(sqlx::types::Json(sections.projects))
        .bind(sqlx::types::Json(sections.certificates))
        .bind(template)
        .fetch_one(pool)
        .await?;

        Ok(resume)
    }

    /// Delete a resume
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM resumes WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
