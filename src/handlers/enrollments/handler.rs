//! Enrollment handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::EnrollmentService,
    state::AppState,
};

use super::{
    request::EnrollRequest,
    response::{
        EnrolledStudentEntry, EnrollmentCheckResponse, EnrollResponse, MyEnrollmentEntry,
        MyEnrollmentsResponse, TutorStudentsResponse,
    },
};

/// Enroll in a free course
pub async fn enroll_free(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<EnrollRequest>,
) -> AppResult<(StatusCode, Json<EnrollResponse>)> {
    let enrollment = EnrollmentService::enroll_free(
        state.db(),
        &auth_user.id,
        &auth_user.role,
        &payload.course_id,
    )
    .await?;

    let response = EnrollResponse {
        message: "Enrolled successfully".to_string(),
        enrollment_id: enrollment.id,
        course_id: enrollment.course_id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// The caller's enrollments with course info
pub async fn my_enrollments(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MyEnrollmentsResponse>> {
    let entries = EnrollmentService::my_enrollments(state.db(), &auth_user.id).await?;

    let enrollments = entries
        .into_iter()
        .map(|e| MyEnrollmentEntry {
            enrollment_id: e.enrollment.id,
            course_id: e.enrollment.course_id,
            course_title: e.course.as_ref().map(|c| c.title.clone()),
            course_thumbnail: e.course.and_then(|c| c.thumbnail),
            enrolled_at: e.enrollment.created_at,
        })
        .collect();

    Ok(Json(MyEnrollmentsResponse { enrollments }))
}

/// Students across the caller's courses (tutor view)
pub async fn tutor_students(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<TutorStudentsResponse>> {
    let entries = EnrollmentService::tutor_students(state.db(), &auth_user.id).await?;

    let students = entries
        .into_iter()
        .map(|e| EnrolledStudentEntry {
            student_id: e.enrollment.user_id,
            student_name: e.student.as_ref().map(|s| s.name.clone()),
            student_email: e.student.map(|s| s.email),
            course_id: e.enrollment.course_id,
            course_title: e.course.map(|c| c.title),
            enrolled_at: e.enrollment.created_at,
        })
        .collect();

    Ok(Json(TutorStudentsResponse { students }))
}

/// Check whether the caller is enrolled in a course
pub async fn check_enrollment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(course_id): Path<Uuid>,
) -> AppResult<Json<EnrollmentCheckResponse>> {
    let is_enrolled = EnrollmentService::is_enrolled(state.db(), &auth_user.id, &course_id).await?;

    Ok(Json(EnrollmentCheckResponse {
        course_id,
        is_enrolled,
    }))
}
