//! HTTP server module.
//!
//! Serves the router on plain HTTP. TLS is expected to be terminated by the
//! load balancer or ingress in front of the service.
//!
//! The server includes graceful shutdown on SIGTERM/SIGINT, draining in-flight
//! connections for a configurable grace period.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
