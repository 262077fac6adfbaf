//! Course handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::CourseService,
    state::AppState,
};

use super::{
    request::{CreateCourseRequest, UpdateCourseRequest},
    response::{
        CourseDetailResponse, CourseListResponse, CourseMutationResponse, CourseSummary,
        CourseTutor, DeleteResponse, MyCourseEntry, MyCoursesResponse,
    },
};

/// Student-facing catalogue of approved courses
pub async fn list_catalogue(State(state): State<AppState>) -> AppResult<Json<CourseListResponse>> {
    let entries = CourseService::list_catalogue(state.db()).await?;

    let courses = entries
        .into_iter()
        .map(|e| CourseSummary::from_course(e.course, e.tutor))
        .collect();

    Ok(Json(CourseListResponse { courses }))
}

/// Create a course (approved tutors only)
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseMutationResponse>)> {
    payload.validate()?;

    let course = CourseService::create_course(
        state.db(),
        &auth_user.id,
        &payload.title,
        &payload.description,
        payload.price,
        payload.thumbnail.as_deref(),
        payload.modules,
    )
    .await?;

    let response = CourseMutationResponse {
        message: "Course created and submitted for review".to_string(),
        course_id: course.id,
        status: course.status,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// The caller's own courses with enrollment counts
pub async fn my_courses(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MyCoursesResponse>> {
    let entries = CourseService::my_courses(state.db(), &auth_user.id).await?;

    let courses = entries
        .into_iter()
        .map(|e| MyCourseEntry {
            id: e.course.id,
            title: e.course.title,
            price: e.course.price,
            status: e.course.status,
            is_approved: e.course.is_approved,
            student_count: e.student_count,
            updated_at: e.course.updated_at,
        })
        .collect();

    Ok(Json(MyCoursesResponse { courses }))
}

/// One course with visibility-gated module content
pub async fn get_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CourseDetailResponse>> {
    let access = CourseService::get_course(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    let course = access.course;
    let module_count = course.modules.0.len();
    let modules = access.can_view_content.then_some(course.modules.0);

    Ok(Json(CourseDetailResponse {
        id: course.id,
        title: course.title,
        description: course.description,
        price: course.price,
        thumbnail: course.thumbnail,
        status: course.status,
        is_enrolled: access.is_enrolled,
        modules,
        module_count,
        tutor: access.tutor.map(CourseTutor::from),
        created_at: course.created_at,
        updated_at: course.updated_at,
    }))
}

/// Update a course (owner only; resets review state)
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseMutationResponse>> {
    payload.validate()?;

    let course = CourseService::update_course(
        state.db(),
        &id,
        &auth_user.id,
        &payload.title,
        &payload.description,
        payload.price,
        payload.thumbnail.as_deref(),
        payload.modules,
    )
    .await?;

    Ok(Json(CourseMutationResponse {
        message: "Course updated and resubmitted for review".to_string(),
        course_id: course.id,
        status: course.status,
    }))
}

/// Delete a course (owner or admin)
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    CourseService::delete_course(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(Json(DeleteResponse {
        message: "Course deleted".to_string(),
    }))
}
