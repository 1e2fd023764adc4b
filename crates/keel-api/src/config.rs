//! Configuration management for keel
//!
//! Configuration is resolved by layering four sources, later entries winning:
//!
//! 1. built-in defaults
//! 2. the TOML config file (`--config`, or the platform config dir)
//! 3. environment variables (`KEEL__SERVER__PORT=9000 keel`)
//! 4. command-line flags, applied by the caller via [`AppConfig::apply_overrides`]

use crate::cli::ServeArgs;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// The `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host IP to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// The `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily-rotated log files. Logging stays on stderr
    /// only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { directory: None }
    }
}

impl AppConfig {
    /// Load configuration, merging file and environment over the defaults.
    ///
    /// An explicitly passed file must exist; the default path is optional.
    pub fn load(explicit: Option<&PathBuf>) -> ApiResult<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let defaults = config::Config::try_from(&Self::default()).map_err(config_error)?;

        let merged = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(
                config::Environment::with_prefix("KEEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        merged.try_deserialize().map_err(config_error)
    }

    /// Apply command-line overrides, the last layer in the precedence order.
    pub fn apply_overrides(&mut self, serve: &ServeArgs) {
        if let Some(host) = &serve.host {
            self.server.host = host.clone();
        }
        if let Some(port) = serve.port {
            self.server.port = port;
        }
    }

    /// Default config file location for this platform.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "keel", "keel")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".keel.toml"))
    }
}

impl ServerConfig {
    /// Parse the configured address into a socket address.
    pub fn socket_addr(&self) -> ApiResult<SocketAddr> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|source| ApiError::InvalidBindAddress { address, source })
    }
}

fn config_error(err: config::ConfigError) -> ApiError {
    ApiError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

// ============================================================================
// Tests
// ============================================================================
