//! Process lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C or test harness
//!     → Shutdown::trigger()
//!     → broadcast to subscribed tasks
//!     → server drains in-flight requests and stops
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
