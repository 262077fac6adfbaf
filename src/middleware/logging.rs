//! Request logging middleware

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Log one line per completed request with method, path, status and latency.
///
/// Server errors and non-404 client errors log at warn; everything else
/// (including 404s, which bots generate constantly) stays at info.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    let noisy_client_error = status.is_client_error() && status.as_u16() != 404;
    if status.is_server_error() || noisy_client_error {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = format!("{:.2}", latency_ms),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = format!("{:.2}", latency_ms),
            "Request completed"
        );
    }

    response
}
