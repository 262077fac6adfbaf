//! Coding challenge handlers

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

/// Challenge routes (all require authentication)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_challenges))
        .route("/{id}", get(handler::get_challenge))
        .route("/{id}/submissions", post(handler::submit))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
