//! toolbartender service
//!
//! Wraps the [`planner`] core with the formatting layer (plan validation,
//! execution-agent prompt, Korean explanation) and an axum HTTP API.

pub mod api;
pub mod config;
pub mod interpreter;
pub mod server;

pub use config::{ServerConfig, ServerConfigError};
pub use interpreter::PlanInterpreter;
pub use server::serve;

use thiserror::Error;

/// Errors that stop the service from starting or running
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ServerConfigError),

    /// Listener or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
