//! Course request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_COURSE_DESCRIPTION_LENGTH, MAX_COURSE_TITLE_LENGTH},
    models::CourseModule,
};

/// Course creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = MAX_COURSE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_COURSE_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(url)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

/// Course update request; replaces the course's content wholesale
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_COURSE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_COURSE_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(url)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub modules: Vec<CourseModule>,
}
