//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from GREETER_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!
//! At startup, before the listener binds:
//!     validation.rs checks the API_KEY environment variable
//!     → missing/empty value aborts startup with ConfigError
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime reload
//! - All fields have defaults so an empty config is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The API_KEY value is only checked for presence, never used

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
