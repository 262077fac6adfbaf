//! Challenge response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Challenge, TestCase};

/// Listing entry: challenge metadata without test cases
#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl From<Challenge> for ChallengeSummary {
    fn from(challenge: Challenge) -> Self {
        Self {
            id: challenge.id,
            title: challenge.title,
            difficulty: challenge.difficulty,
            created_at: challenge.created_at,
        }
    }
}

/// Full challenge detail shown in the editor
#[derive(Debug, Serialize)]
pub struct ChallengeDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub base_code: Option<String>,
    pub test_cases: Vec<TestCase>,
}

impl From<Challenge> for ChallengeDetailResponse {
    fn from(challenge: Challenge) -> Self {
        Self {
            id: challenge.id,
            title: challenge.title,
            description: challenge.description,
            difficulty: challenge.difficulty,
            base_code: challenge.base_code,
            test_cases: challenge.test_cases.0,
        }
    }
}

/// Challenge list response
#[derive(Debug, Serialize)]
pub struct ChallengeListResponse {
    pub challenges: Vec<ChallengeSummary>,
}

/// Outcome for one test case
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    /// Stderr, compile output or a judge failure description
    pub error: String,
    pub passed: bool,
    /// Judge status description, when the run completed
    pub status: Option<String>,
}

/// Aggregated grading outcome for a submission
#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    pub all_passed: bool,
    pub results: Vec<CaseResult>,
    /// Zero unless every case passed and crediting succeeded
    pub xp_awarded: i32,
    pub leveled_up: bool,
}
