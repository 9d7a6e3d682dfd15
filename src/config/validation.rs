//! Configuration validation and startup checks.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address parses as host:port
//! - Check the API_KEY environment variable before the listener binds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - The API_KEY presence check is a pure function over Option<&str> so it is
//!   testable without touching the process environment

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::config::schema::ServerConfig;

/// Environment variable that must be present and non-empty at startup.
pub const API_KEY_VAR: &str = "API_KEY";

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),
}

/// Validate a deserialized configuration.
///
/// Hostnames are not resolved here; the bind address must already be in
/// `ip:port` form.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check an API key value for presence.
///
/// Absent and empty are both rejected; any other value passes. The value is
/// never used beyond this check.
pub fn check_api_key(value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(ConfigError::MissingApiKey),
    }
}

/// Read `API_KEY` from the process environment and require it to be present.
///
/// Called at startup, before the listener binds.
pub fn require_api_key() -> Result<(), ConfigError> {
    let value = std::env::var(API_KEY_VAR).ok();
    check_api_key(value.as_deref())
}
