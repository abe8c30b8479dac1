//! Server configuration for toolbartender-server
//!
//! Loaded from `toolbartender.toml`, then overridden by `TB_*` environment
//! variables:
//!
//! ```toml
//! [server]
//! name = "toolbartender"
//! host = "0.0.0.0"
//! port = 3333
//!
//! [logging]
//! level = "debug"
//!
//! [planner]
//! execution_hint = "Execute steps sequentially."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tooling::config::{build_env_key, get_env, get_env_parse, ConfigBuilder};
use tooling::logging::LogLevel;
use tooling::ToolingError;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "toolbartender.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "TB_CONFIG";

/// Prefix of the environment overrides
pub const ENV_PREFIX: &str = "TB_";

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ToolingError),
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfoConfig {
    /// Server name reported by the health endpoint
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerInfoConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_server_name() -> String {
    "toolbartender".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3333
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    #[serde(default)]
    pub level: Option<LogLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Replaces the default execution hint placed in every plan
    #[serde(default)]
    pub execution_hint: Option<String>,
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerInfoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServerConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ServerConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ServerConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration and apply `TB_*` overrides
    ///
    /// The file is taken from, in order:
    /// 1. `path`, when given
    /// 2. the `TB_CONFIG` environment variable
    /// 3. `./toolbartender.toml`, if it exists
    ///
    /// Without a file the defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerConfigError> {
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => get_env(CONFIG_PATH_ENV)?
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .or_else(|| {
                    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                    default.exists().then_some(default)
                }),
        };

        let config = match file {
            Some(file) => {
                tracing::debug!(path = %file.display(), "loading configuration file");
                Self::from_file(file)?
            }
            None => Self::default(),
        };

        Ok(config.with_env_overrides(ENV_PREFIX)?)
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Configured log level, `info` when unset
    pub fn log_level(&self) -> LogLevel {
        self.logging.level.unwrap_or_default()
    }
}

impl ConfigBuilder for ServerConfig {
    fn validate(&self) -> tooling::Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ToolingError::config("server.host", "must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ToolingError::config("server.port", "must be non-zero"));
        }
        Ok(())
    }

    /// Unset variables are left as `""` / `0` / `None` so that `merge`
    /// skips them
    fn from_env(prefix: &str) -> tooling::Result<Self> {
        Ok(Self {
            server: ServerInfoConfig {
                name: get_env(&build_env_key(prefix, "name"))?.unwrap_or_default(),
                host: get_env(&build_env_key(prefix, "host"))?.unwrap_or_default(),
                port: get_env_parse(&build_env_key(prefix, "port"))?.unwrap_or(0),
            },
            logging: LoggingConfig {
                level: get_env_parse(&build_env_key(prefix, "log_level"))?,
            },
            planner: PlannerConfig {
                execution_hint: get_env(&build_env_key(prefix, "execution_hint"))?
                    .filter(|hint| !hint.trim().is_empty()),
            },
        })
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        if !other.server.name.trim().is_empty() {
            self.server.name = other.server.name;
        }
        if !other.server.host.trim().is_empty() {
            self.server.host = other.server.host;
        }
        if other.server.port != 0 {
            self.server.port = other.server.port;
        }
        if other.logging.level.is_some() {
            self.logging.level = other.logging.level;
        }
        if other.planner.execution_hint.is_some() {
            self.planner.execution_hint = other.planner.execution_hint;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3333");
        assert_eq!(config.log_level(), LogLevel::Info);
        assert_eq!(config.server.name, "toolbartender");
        assert!(config.planner.execution_hint.is_none());
    }

    #[test]
    fn test_config_parsing() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080

[logging]
level = "debug"

[planner]
execution_hint = "Stop after each step."
"#;

        let config = ServerConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.name, "toolbartender");
        assert_eq!(config.log_level(), LogLevel::Debug);
        assert_eq!(
            config.planner.execution_hint.as_deref(),
            Some("Stop after each step.")
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::from_toml("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ServerConfig::from_toml("[server]\nport = 0\n"),
            Err(ServerConfigError::InvalidConfig(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml("[logging]\nlevel = \"loud\"\n"),
            Err(ServerConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_merge_skips_unset_values() {
        let mut base = ServerConfig::from_toml("[server]\nport = 9000\n").unwrap();
        let overlay = ServerConfig {
            server: ServerInfoConfig {
                name: String::new(),
                host: "0.0.0.0".to_string(),
                port: 0,
            },
            ..ServerConfig::default()
        };

        base.merge(overlay);
        assert_eq!(base.bind_address(), "0.0.0.0:9000");
        assert_eq!(base.server.name, "toolbartender");
    }

    #[test]
    fn test_env_overrides() {
        let prefix = "TB_CONFIG_TEST_";
        std::env::set_var("TB_CONFIG_TEST_PORT", "4444");
        std::env::set_var("TB_CONFIG_TEST_LOG_LEVEL", "warn");
        std::env::set_var("TB_CONFIG_TEST_HOST", "");

        let config = ServerConfig::default().with_env_overrides(prefix).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:4444");
        assert_eq!(config.log_level(), LogLevel::Warn);

        std::env::set_var("TB_CONFIG_TEST_PORT", "not-a-port");
        assert!(ServerConfig::default().with_env_overrides(prefix).is_err());

        std::env::remove_var("TB_CONFIG_TEST_PORT");
        std::env::remove_var("TB_CONFIG_TEST_LOG_LEVEL");
        std::env::remove_var("TB_CONFIG_TEST_HOST");
    }
}
