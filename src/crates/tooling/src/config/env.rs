//! Environment variable loading utilities

use crate::{Result, ToolingError};
use std::env;
use std::str::FromStr;

/// Load an environment variable as a string
///
/// * `Ok(None)` if the variable is not set
/// * `Err` if it is set but not valid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ToolingError::config(key, "contains invalid UTF-8"))
        }
    }
}

/// Load and parse an environment variable
///
/// Blank values are treated as unset so that `TB_PORT=` in a shell profile
/// falls back to the configured value instead of failing.
pub fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(key)? {
        Some(val) if !val.trim().is_empty() => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ToolingError::config(key, format!("failed to parse {:?}: {}", val, e))),
        _ => Ok(None),
    }
}

/// Build a prefixed environment variable name
///
/// ```rust
/// use tooling::config::build_env_key;
///
/// assert_eq!(build_env_key("TB_", "log_level"), "TB_LOG_LEVEL");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
