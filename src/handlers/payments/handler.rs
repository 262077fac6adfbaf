//! Payment handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{payment_service::PurchaseWithCourse, PaymentService},
    state::AppState,
};

use super::{
    request::{CreateOrderRequest, VerifyPaymentRequest},
    response::{OrderResponse, PurchaseEntry, PurchaseListResponse, VerifyResponse},
};

/// Create a mock payment order for a paid course
pub async fn create_order(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let purchase = PaymentService::create_order(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        &payload.course_id,
    )
    .await?;

    let response = OrderResponse {
        order_id: purchase.order_id,
        course_id: purchase.course_id,
        amount: purchase.amount,
        status: purchase.status,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Verify a mock payment: completes the purchase and enrolls the buyer
pub async fn verify_payment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<VerifyPaymentRequest>,
) -> AppResult<Json<VerifyResponse>> {
    let purchase =
        PaymentService::verify_payment(state.db(), &auth_user.id, &payload.order_id).await?;

    Ok(Json(VerifyResponse {
        message: "Payment verified, enrollment created".to_string(),
        order_id: purchase.order_id,
        payment_id: purchase.payment_id,
        course_id: purchase.course_id,
        status: purchase.status,
    }))
}

/// Completed sales across the caller's courses (tutor view)
pub async fn tutor_sales(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PurchaseListResponse>> {
    let entries = PaymentService::tutor_sales(state.db(), &auth_user.id).await?;

    Ok(Json(PurchaseListResponse {
        purchases: to_entries(entries),
    }))
}

/// Flatten purchase/course pairs into response rows (shared with admin)
pub fn to_entries(entries: Vec<PurchaseWithCourse>) -> Vec<PurchaseEntry> {
    entries
        .into_iter()
        .map(|e| PurchaseEntry {
            order_id: e.purchase.order_id,
            payment_id: e.purchase.payment_id,
            course_id: e.purchase.course_id,
            course_title: e.course.map(|c| c.title),
            amount: e.purchase.amount,
            status: e.purchase.status,
            created_at: e.purchase.created_at,
        })
        .collect()
}
