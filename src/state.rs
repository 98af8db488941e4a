//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, HealthConfig};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds only the immutable configuration. The version identifier itself is
/// not stored here; handlers read it from the environment on every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Health endpoint settings (version variable name and fallback).
    pub fn health(&self) -> &HealthConfig {
        &self.config.health
    }
}
