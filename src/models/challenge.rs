//! Challenge model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Coding challenge database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    /// Starter code shown in the editor
    pub base_code: Option<String>,
    /// Ordered test cases; hidden from the general listing
    pub test_cases: sqlx::types::Json<Vec<TestCase>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single (stdin, expected stdout) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}
