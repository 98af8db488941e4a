use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Request-level failures.
///
/// The health and root handlers cannot fail; this only covers requests that
/// never reach one of them.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
