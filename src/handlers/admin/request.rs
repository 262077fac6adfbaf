//! Admin request DTOs

use serde::Deserialize;

/// Review decision for a tutor portfolio or course
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// "approved" or "rejected"
    pub decision: String,
}
