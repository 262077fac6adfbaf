//! Enrollment request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Free-course enrollment request
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_id: Uuid,
}
