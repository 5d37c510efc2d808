//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `shoewash.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values; variables missing from the process environment are
//! also looked up in a `.env` file next to it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use shoewash_adapter_storage_postgrest::Config as StoreConfig;

/// Name of the optional config file.
pub const CONFIG_FILE: &str = "shoewash.toml";

/// Name of the optional dotenv file.
pub const ENV_FILE: &str = ".env";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote store settings.
    pub store: StoreConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `shoewash.toml` (if present) then apply
    /// overrides from the environment and from `.env` (if present).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML or dotenv file exists but is malformed,
    /// or if the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        let dotenv = read_env_file(ENV_FILE)?;
        config.apply_overrides(|name| {
            std::env::var(name)
                .ok()
                .or_else(|| dotenv.get(name).cloned())
        });
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SHOEWASH_HOST") {
            self.server.host = val;
        }
        for name in ["PORT", "SHOEWASH_PORT"] {
            if let Some(port) = var(name).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SUPABASE_URL") {
            self.store.url = val;
        }
        if let Some(val) = var("SUPABASE_KEY") {
            self.store.key = val;
        }
        if let Some(val) = var("SHOEWASH_TABLE") {
            self.store.table = val;
        }
        for name in ["RUST_LOG", "SHOEWASH_LOG"] {
            if let Some(val) = var(name) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read `KEY=value` pairs from a dotenv file; a missing file yields none.
fn read_env_file(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .map(|pair| pair.map_err(ConfigError::EnvFile))
            .collect(),
        Err(err) if err.not_found() => Ok(HashMap::new()),
        Err(err) => Err(ConfigError::EnvFile(err)),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shoewashd=info,shoewash=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Dotenv file could not be read or parsed.
    #[error("failed to read .env file")]
    EnvFile(#[source] dotenvy::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
