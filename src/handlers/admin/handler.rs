//! Admin handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    handlers::courses::response::DeleteResponse,
    handlers::payments::{self, response::PurchaseListResponse},
    middleware::auth::AuthenticatedUser,
    services::{AdminService, PaymentService},
    state::AppState,
};

use super::{
    request::ReviewRequest,
    response::{
        AdminCoursesResponse, AdminUsersResponse, PendingTutorsResponse, ReviewResponse,
    },
};

/// Verify user is admin
fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// Tutor portfolios awaiting review
pub async fn pending_tutors(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PendingTutorsResponse>> {
    require_admin(&auth_user)?;

    let tutors = AdminService::pending_tutors(state.db()).await?;

    Ok(Json(PendingTutorsResponse {
        tutors: tutors.into_iter().map(Into::into).collect(),
    }))
}

/// Approve or reject a tutor portfolio
pub async fn review_tutor(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    require_admin(&auth_user)?;

    let tutor = AdminService::review_tutor(state.db(), &id, &payload.decision).await?;

    Ok(Json(ReviewResponse {
        message: format!("Tutor portfolio {}", tutor.tutor_status),
        id: tutor.id,
        status: tutor.tutor_status,
    }))
}

/// Courses awaiting review
pub async fn pending_courses(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<AdminCoursesResponse>> {
    require_admin(&auth_user)?;

    let courses = AdminService::pending_courses(state.db()).await?;

    Ok(Json(AdminCoursesResponse {
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}

/// Approve or reject a course
pub async fn review_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<ReviewResponse>> {
    require_admin(&auth_user)?;

    let course = AdminService::review_course(state.db(), &id, &payload.decision).await?;

    Ok(Json(ReviewResponse {
        message: format!("Course {}", course.status),
        id: course.id,
        status: course.status,
    }))
}

/// All courses in every review state
pub async fn all_courses(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<AdminCoursesResponse>> {
    require_admin(&auth_user)?;

    let courses = AdminService::all_courses(state.db()).await?;

    Ok(Json(AdminCoursesResponse {
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}

/// All students and tutors
pub async fn all_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<AdminUsersResponse>> {
    require_admin(&auth_user)?;

    let users = AdminService::all_users(state.db()).await?;

    Ok(Json(AdminUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// Delete a non-admin user account
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    require_admin(&auth_user)?;

    AdminService::delete_user(state.db(), &id).await?;

    Ok(Json(DeleteResponse {
        message: "User deleted".to_string(),
    }))
}

/// Every purchase on the platform
pub async fn all_purchases(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PurchaseListResponse>> {
    require_admin(&auth_user)?;

    let entries = PaymentService::list_all(state.db()).await?;

    Ok(Json(PurchaseListResponse {
        purchases: payments::to_entries(entries),
    }))
}
