//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Tutor portfolio update request; omitted fields keep their value
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePortfolioRequest {
    #[validate(length(max = 4096))]
    pub bio: Option<String>,

    #[validate(length(max = 256))]
    pub specialization: Option<String>,

    #[validate(url)]
    pub photo: Option<String>,

    #[validate(length(max = 4096))]
    pub experience: Option<String>,

    #[validate(length(max = 4096))]
    pub qualification: Option<String>,
}
