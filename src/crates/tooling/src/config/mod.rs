//! Configuration management utilities
//!
//! - `ConfigBuilder` trait for layered configuration (file → env → validate)
//! - Environment variable loading with typed parsing
//!
//! # Example
//!
//! ```rust,ignore
//! use tooling::config::{ConfigBuilder, get_env_parse};
//!
//! let port: Option<u16> = get_env_parse("TB_PORT")?;
//! let config = ServerConfig::from_env_with_defaults("TB_")?;
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
pub use env::{build_env_key, get_env, get_env_parse};
