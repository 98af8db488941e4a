//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running,
//! along with the deployed build version. Used by Kubernetes, ECS, systemd, and
//! load balancers to verify the service is alive.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::HEALTH_STATUS_OK;
use crate::state::AppState;

/// Body of a health check response.
///
/// Built fresh for every request and serialized as
/// `{"status":"ok","version":"<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: String,
}

impl HealthStatus {
    /// Build a status from an optional version value.
    ///
    /// An absent or empty value falls back to `default`.
    pub fn with_version(value: Option<String>, default: &str) -> Self {
        let version = value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string());
        Self {
            status: HEALTH_STATUS_OK,
            version,
        }
    }

    /// Read the version from the environment variable `var`.
    ///
    /// Unset and non-UTF-8 values are treated alike.
    pub fn resolve(var: &str, default: &str) -> Self {
        Self::with_version(std::env::var(var).ok(), default)
    }
}

/// Health check handler.
///
/// This is a liveness probe: it only checks that the process can respond to
/// HTTP. The version is looked up on each call, so a changed environment is
/// visible immediately.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let config = state.health();
    let status = HealthStatus::resolve(&config.version_env, &config.default_version);
    tracing::debug!(version = %status.version, "Health check");
    Json(status)
}
