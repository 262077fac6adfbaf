//! Resume request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::{
    CertificateEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
};

/// Create or replace a resume
#[derive(Debug, Deserialize, Validate)]
pub struct ResumePayload {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[serde(default)]
    pub personal: PersonalInfo,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    #[serde(default)]
    pub certificates: Vec<CertificateEntry>,

    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "classic".to_string()
}
