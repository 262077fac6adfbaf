//! Challenge request DTOs

use serde::Deserialize;
use validator::Validate;

/// Challenge submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1))]
    pub code: String,

    /// One of the supported language identifiers
    pub language: String,
}
