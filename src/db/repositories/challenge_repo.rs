//! Challenge repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Challenge, TestCase},
};

/// Repository for challenge database operations
pub struct ChallengeRepository;

impl ChallengeRepository {
    /// Insert a challenge (used by seeding)
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        difficulty: &str,
        base_code: Option<&str>,
        test_cases: &[TestCase],
    ) -> AppResult<Challenge> {
        let challenge = sqlx::query_as::<_, Challenge>(
            r#"
            INSERT INTO challenges (title, description, difficulty, base_code, test_cases)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(base_code)
        .bind(sqlx::types::Json(test_cases))
        .fetch_one(pool)
        .await?;

        Ok(challenge)
    }

    /// Find challenge by ID (includes test cases)
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Challenge>> {
        let challenge =
            sqlx::query_as::<_, Challenge>(r#"SELECT * FROM challenges WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(challenge)
    }

    /// All challenges (test cases included; callers strip them for listings)
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Challenge>> {
        let challenges =
            sqlx::query_as::<_, Challenge>(r#"SELECT * FROM challenges ORDER BY created_at ASC"#)
                .fetch_all(pool)
                .await?;

        Ok(challenges)
    }

    /// Remove every challenge (used by seeding)
    pub async fn delete_all(pool: &PgPool) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM challenges"#).execute(pool).await?;
        Ok(())
    }
}
