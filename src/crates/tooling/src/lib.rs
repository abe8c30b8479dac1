//! Shared helpers for the toolbartender workspace
//!
//! # Modules
//!
//! - `config` - Environment variable loading and the `ConfigBuilder` trait
//! - `error` - Error chain formatting
//! - `logging` - Subscriber setup, log guards and log sanitizing

pub mod config;
pub mod error;
pub mod logging;

use thiserror::Error;

/// Errors that can occur in the tooling crate
#[derive(Debug, Error)]
pub enum ToolingError {
    /// Configuration value missing or malformed
    #[error("Configuration error for {key}: {message}")]
    Config { key: String, message: String },

    /// Logging subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl ToolingError {
    /// Shorthand for a [`ToolingError::Config`]
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, ToolingError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
