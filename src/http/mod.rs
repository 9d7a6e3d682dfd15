//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (the greeting route)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
