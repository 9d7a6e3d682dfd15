//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log filter configurable through RUST_LOG, with a sensible default
//! - No metrics or trace exporters; logging is the only output

pub mod logging;

pub use logging::init_logging;
