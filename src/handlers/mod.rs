//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod challenges;
pub mod chats;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod payments;
pub mod relay;
pub mod resumes;
pub mod users;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(relay::routes())
        .nest("/auth", auth::routes(state))
        .nest("/users", users::routes(state))
        .nest("/courses", courses::routes(state))
        .nest("/enrollments", enrollments::routes(state))
        .nest("/payments", payments::routes(state))
        .nest("/challenges", challenges::routes(state))
        .nest("/chats", chats::routes(state))
        .nest("/resumes", resumes::routes(state))
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
}
