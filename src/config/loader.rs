//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "GREETER_CONFIG";

/// Error type for configuration loading and startup checks.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API_KEY environment variable is absent or empty.
    #[error("API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<ValidationError>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from the file named by `GREETER_CONFIG`, or fall back
/// to defaults when the variable is unset.
pub fn load_or_default() -> Result<ServerConfig, ConfigError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => load_config(Path::new(&path)),
        Err(_) => Ok(ServerConfig::default()),
    }
}
