//! Course handlers

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

/// Course routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let public = Router::new().route("/", get(handler::list_catalogue));

    let protected = Router::new()
        .route("/", post(handler::create_course))
        .route("/my", get(handler::my_courses))
        .route("/{id}", get(handler::get_course))
        .route("/{id}", put(handler::update_course))
        .route("/{id}", delete(handler::delete_course))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public.merge(protected)
}
