//! Payment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A freshly created mock order
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub course_id: Uuid,
    pub amount: f64,
    pub status: String,
}

/// Verification acknowledgement
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: String,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub course_id: Uuid,
    pub status: String,
}

/// One purchase row with course info
#[derive(Debug, Serialize)]
pub struct PurchaseEntry {
    pub order_id: String,
    pub payment_id: Option<String>,
    pub course_id: Uuid,
    pub course_title: Option<String>,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Purchase list response
#[derive(Debug, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<PurchaseEntry>,
}
