//! Enrollment handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Enrollment routes (all require authentication)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::enroll_free))
        .route("/my", get(handler::my_enrollments))
        .route("/students", get(handler::tutor_students))
        .route("/check/{course_id}", get(handler::check_enrollment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
