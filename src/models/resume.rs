//! Resume model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Resume database model
///
/// Structured resume data owned by one user; rendering to a formatted
/// document happens client-side from the chosen template name.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub personal: sqlx::types::Json<PersonalInfo>,
    pub experience: sqlx::types::Json<Vec<ExperienceEntry>>,
    pub education: sqlx::types::Json<Vec<EducationEntry>>,
    pub skills: sqlx::types::Json<Vec<String>>,
    pub projects: sqlx::types::Json<Vec<ProjectEntry>>,
    pub certificates: sqlx::types::Json<Vec<CertificateEntry>>,
    pub template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Personal details section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Work experience entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub year: Option<String>,
}

/// Project entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Certificate entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateEntry {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}
