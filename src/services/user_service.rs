//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{roles, LEADERBOARD_SIZE, XP_PER_LEVEL},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// XP progress snapshot for the profile page
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct XpStats {
    pub xp: i32,
    pub level: i32,
    /// XP still needed to clear the current level's threshold
    pub xp_to_next_level: i32,
}

/// User service for profile and gamification logic
pub struct UserService;

impl UserService {
    /// Fetch the caller's own profile
    pub async fn get_profile(pool: &PgPool, user_id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Fetch a tutor's public profile
    pub async fn get_tutor_profile(pool: &PgPool, tutor_id: &Uuid) -> AppResult<User> {
        let user = UserRepository::find_by_id(pool, tutor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tutor not found".to_string()))?;

        if user.role != roles::TUTOR {
            return Err(AppError::NotFound("Tutor not found".to_string()));
        }

        Ok(user)
    }

    /// Update the caller's tutor portfolio.
    ///
    /// Any edit sends the portfolio back through admin review: the status
    /// returns to pending and the approval flag is cleared.
    pub async fn update_portfolio(
        pool: &PgPool,
        user_id: &Uuid,
        role: &str,
        bio: Option<&str>,
        specialization: Option<&str>,
        photo: Option<&str>,
        experience: Option<&str>,
        qualification: Option<&str>,
    ) -> AppResult<User> {
        if role != roles::TUTOR {
            return Err(AppError::Forbidden(
                "Only tutors can maintain a portfolio".to_string(),
            ));
        }

        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let user = UserRepository::update_portfolio(
            pool,
            user_id,
            bio,
            specialization,
            photo,
            experience,
            qualification,
        )
        .await?;

        tracing::info!(user_id = %user_id, "Tutor portfolio updated, review state reset to pending");

        Ok(user)
    }

    /// Top students ranked by level, then XP
    pub async fn leaderboard(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::leaderboard(pool, LEADERBOARD_SIZE).await
    }

    /// XP progress for the caller
    pub async fn xp_stats(pool: &PgPool, user_id: &Uuid) -> AppResult<XpStats> {
        let user = Self::get_profile(pool, user_id).await?;

        let threshold = user.level * XP_PER_LEVEL;

        Ok(XpStats {
            xp: user.xp,
            level: user.level,
            xp_to_next_level: (threshold - user.xp).max(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_to_next_level_arithmetic() {
        // Level 2 threshold is 200; at 150 XP the gap is 50
        let stats = XpStats {
            xp: 150,
            level: 2,
            xp_to_next_level: (2 * XP_PER_LEVEL - 150).max(0),
        };
        assert_eq!(stats.xp_to_next_level, 50);
    }
}
