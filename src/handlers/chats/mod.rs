//! Doubt chat handlers

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

/// Chat routes (all require authentication)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/messages", post(handler::send_message))
        .route("/history/{course_id}/{user_id}", get(handler::history))
        .route("/doubts", get(handler::tutor_doubts))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
