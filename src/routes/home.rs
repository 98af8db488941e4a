//! Root path handler.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::config::HEALTH_PATH;

/// Redirect `/` to the health endpoint.
///
/// Uses `302 Found` with an empty body. axum's `Redirect` helpers only emit
/// 303, 307 and 308, so the response is built by hand.
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, HEALTH_PATH)])
}
