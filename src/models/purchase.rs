//! Purchase model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::purchase_statuses;

/// Purchase database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    /// Mock payment-gateway order identifier (`order_<hex>`)
    pub order_id: String,
    /// Mock payment identifier (`pay_<hex>`), set on completion
    pub payment_id: Option<String>,
    pub amount: f64,
    /// One of `purchase_statuses::*`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Purchase {
    /// Check whether the mock payment has already been processed
    pub fn is_completed(&self) -> bool {
        self.status == purchase_statuses::COMPLETED
    }
}
