//! Bootstrap configuration for coach-api
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (`--config`, `--host`, `--port`)
//! 2. Environment variables (`COACH_CONFIG`, `COACH_API_HOST`, `COACH_API_PORT`)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)
//!
//! A missing default config file is not an error: the service logs a warning
//! and starts with built-in defaults. A file named explicitly (CLI or
//! environment) must exist and parse.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "COACH_CONFIG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Listen address
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub facial: FacialConfig,

    #[serde(default)]
    pub results: ResultsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` overrides
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Facial analysis configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct FacialConfig {
    /// Seed for the synthetic signal source; entropy-seeded when absent
    #[serde(default)]
    pub synthetic_seed: Option<u64>,
}

/// Per-call result retention
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResultsConfig {
    /// Calls retained per result kind before the oldest is evicted
    #[serde(default = "default_results_capacity")]
    pub capacity: usize,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            capacity: default_results_capacity(),
        }
    }
}

fn default_results_capacity() -> usize {
    crate::cache::DEFAULT_RESULT_CAPACITY
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5790
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
            facial: FacialConfig::default(),
            results: ResultsConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve and load configuration
    ///
    /// Explicit paths (CLI argument, then `COACH_CONFIG`) must load. Otherwise
    /// the platform config file is used if present, falling back to defaults.
    pub fn load(cli_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(cli_path, env_path, default_config_path())
    }

    /// [`TomlConfig::load`] with every candidate location supplied by the caller
    pub fn load_from(
        cli_path: Option<&Path>,
        env_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<LoadedConfig, ConfigError> {
        if let Some(path) = cli_path {
            return Ok(LoadedConfig {
                config: Self::from_file(path)?,
                origin: ConfigOrigin::CommandLine(path.to_path_buf()),
            });
        }

        if let Some(path) = env_path {
            return Ok(LoadedConfig {
                config: Self::from_file(&path)?,
                origin: ConfigOrigin::Environment(path),
            });
        }

        match default_path {
            Some(path) if path.exists() => Ok(LoadedConfig {
                config: Self::from_file(&path)?,
                origin: ConfigOrigin::File(path),
            }),
            missing => Ok(LoadedConfig {
                config: Self::default(),
                origin: ConfigOrigin::Defaults(missing),
            }),
        }
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    CommandLine(PathBuf),
    Environment(PathBuf),
    File(PathBuf),
    /// No file found; holds the default location that was checked, if any
    Defaults(Option<PathBuf>),
}

/// Configuration together with its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    pub origin: ConfigOrigin,
}

impl LoadedConfig {
    /// Report the configuration source; call after the subscriber is installed
    pub fn log_origin(&self) {
        match &self.origin {
            ConfigOrigin::CommandLine(path) => {
                info!("Config loaded from command line path: {}", path.display())
            }
            ConfigOrigin::Environment(path) => {
                info!("Config loaded from {}: {}", CONFIG_ENV_VAR, path.display())
            }
            ConfigOrigin::File(path) => info!("Config loaded from {}", path.display()),
            ConfigOrigin::Defaults(Some(path)) => warn!(
                "No config file at {}; using built-in defaults",
                path.display()
            ),
            ConfigOrigin::Defaults(None) => {
                warn!("Could not determine config directory; using built-in defaults")
            }
        }
    }
}

/// Platform config file location (`<config dir>/interview-coach/coach-api.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("interview-coach").join("coach-api.toml"))
}
