//! HTTP route handlers.
//!
//! Two routes exist: the liveness endpoint and a root redirect to it. The
//! health route is never cached so probes always see the current version.
//! Anything else falls through to a JSON 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH, ROOT_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let home_routes = Router::new().route(ROOT_PATH, get(home::index));

    Router::new()
        .merge(health_routes)
        .merge(home_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
