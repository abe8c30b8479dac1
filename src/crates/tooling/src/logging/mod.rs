//! Logging utilities
//!
//! Subscriber setup for the binaries plus helpers for structured logging
//! with tracing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{Result, ToolingError};

/// Log levels accepted in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ToolingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ToolingError::config("log_level", format!("unknown level {:?}", other))),
        }
    }
}

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies to every
/// target. Fails if a subscriber is already installed.
pub fn init_tracing(default_level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ToolingError::Logging(e.to_string()))
}

/// RAII guard for logging scope entry and exit
///
/// ```rust
/// use tooling::logging::LogGuard;
///
/// fn compile() {
///     let _guard = LogGuard::new("compile");
///     // exit is logged with elapsed time when the guard drops
/// }
/// ```
pub struct LogGuard {
    name: String,
    start: Instant,
}

impl LogGuard {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Entering: {}", name);
        Self {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        debug!("Exiting: {} (elapsed: {:?})", self.name, self.start.elapsed());
    }
}

static REDACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)(api[\s_-]?key|apikey)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(password|passwd|pwd)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(token|secret)\s*[:=]\s*\S+", "$1: [REDACTED]"),
        (r"(?i)(authorization)\s*:\s*bearer\s+\S+", "$1: Bearer [REDACTED]"),
        (r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}", "[EMAIL]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

/// Sanitize user text before it reaches the logs
///
/// Goals routinely carry recipient addresses, so e-mail addresses are
/// masked along with the usual secret patterns.
///
/// ```rust
/// use tooling::logging::sanitize_for_logging;
///
/// let line = sanitize_for_logging("논문 요약해서 me@example.com 으로 보내줘");
/// assert!(line.contains("[EMAIL]"));
/// assert!(!line.contains("me@example.com"));
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    REDACTIONS
        .iter()
        .fold(input.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}
