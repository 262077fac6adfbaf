//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{constants::roles, error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email (for login)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update tutor portfolio fields and force the review state back to pending
    pub async fn update_portfolio(
        pool: &PgPool,
        id: &Uuid,
        bio: Option<&str>,
        specialization: Option<&str>,
        photo: Option<&str>,
        experience: Option<&str>,
        qualification: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                bio = COALESCE($2, bio),
                specialization = COALESCE($3, specialization),
                photo = COALESCE($4, photo),
                experience = COALESCE($5, experience),
                qualification = COALESCE($6, qualification),
                tutor_status = 'pending',
                is_approved_tutor = FALSE,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(bio)
        .bind(specialization)
        .bind(photo)
        .bind(experience)
        .bind(qualification)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Apply an admin review decision to a tutor portfolio
    pub async fn set_tutor_status(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
        is_approved: bool,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET tutor_status = $2, is_approved_tutor = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(is_approved)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Credit XP and persist the leveling outcome
    pub async fn set_xp_and_level(
        pool: &PgPool,
        id: &Uuid,
        xp: i32,
        level: i32,
    ) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET xp = $2, level = $3, updated_at = NOW() WHERE id = $1"#)
            .bind(id)
            .bind(xp)
            .bind(level)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Tutors whose portfolios are awaiting review
    pub async fn list_pending_tutors(pool: &PgPool) -> AppResult<Vec<User>> {
        let tutors = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE role = 'tutor' AND tutor_status = 'pending'
            ORDER BY updated_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tutors)
    }

    /// Top students by level then XP
    pub async fn leaderboard(pool: &PgPool, limit: i64) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE role = $1
            ORDER BY level DESC, xp DESC
            LIMIT $2
            "#,
        )
        .bind(roles::USER)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// List students and tutors (admin view)
    pub async fn list_non_admins(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE role IN ('user', 'tutor')
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Delete a user
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
