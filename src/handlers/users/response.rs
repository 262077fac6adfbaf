//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Public tutor profile
#[derive(Debug, Serialize)]
pub struct TutorProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub specialization: Option<String>,
    pub photo: Option<String>,
    pub experience: Option<String>,
    pub qualification: Option<String>,
    pub is_approved_tutor: bool,
}

impl From<User> for TutorProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            bio: user.bio,
            specialization: user.specialization,
            photo: user.photo,
            experience: user.experience,
            qualification: user.qualification,
            is_approved_tutor: user.is_approved_tutor,
        }
    }
}

/// Portfolio update acknowledgement
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub message: String,
    pub tutor_status: String,
    pub profile: TutorProfileResponse,
}

/// One leaderboard row
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub xp: i32,
    pub level: i32,
    pub member_since: DateTime<Utc>,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// XP stats response
#[derive(Debug, Serialize)]
pub struct XpStatsResponse {
    pub xp: i32,
    pub level: i32,
    pub xp_to_next_level: i32,
}
