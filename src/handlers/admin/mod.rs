//! Admin handlers
//!
//! Review queues for tutor portfolios and courses, plus platform-wide
//! listings and moderation actions. All routes sit behind the auth
//! middleware; the admin role check happens per handler.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::state::AppState;

/// Admin routes (auth middleware applied by the caller)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tutors/pending", get(handler::pending_tutors))
        .route("/tutors/{id}/review", put(handler::review_tutor))
        .route("/courses/pending", get(handler::pending_courses))
        .route("/courses/{id}/review", put(handler::review_course))
        .route("/courses", get(handler::all_courses))
        .route("/users", get(handler::all_users))
        .route("/users/{id}", delete(handler::delete_user))
        .route("/purchases", get(handler::all_purchases))
}
