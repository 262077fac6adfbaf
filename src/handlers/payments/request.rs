//! Payment request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Create a mock payment order for a course
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub course_id: Uuid,
}

/// Verify a mock payment for a previously created order
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub order_id: String,
}
