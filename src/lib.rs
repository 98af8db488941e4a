//! Heartbeat - a minimal liveness service.
//!
//! Answers `GET /health` with `{"status":"ok","version":"<sha>"}`, where the
//! version is read from the environment on every request, and redirects `/`
//! to the health endpoint.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
