//! User profile and gamification handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/leaderboard", get(handler::leaderboard))
        .route("/tutors/{id}", get(handler::tutor_profile));

    let protected = Router::new()
        .route("/portfolio", put(handler::update_portfolio))
        .route("/xp", get(handler::xp_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public.merge(protected)
}
