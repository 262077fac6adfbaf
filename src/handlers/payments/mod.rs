//! Payment handlers (mock checkout flow)

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

/// Payment routes (all require authentication)
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/orders", post(handler::create_order))
        .route("/verify", post(handler::verify_payment))
        .route("/sales", get(handler::tutor_sales))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
}
