//! Resume builder handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Resume routes (all require authentication; owner-scoped)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_resume))
        .route("/", get(handler::list_resumes))
        .route("/{id}", get(handler::get_resume))
        .route("/{id}", put(handler::update_resume))
        .route("/{id}", delete(handler::delete_resume))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
