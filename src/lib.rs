//! Greeting Service Library
//!
//! A minimal HTTP greeting service built with Tokio and Axum.
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────┐
//!     ─────────────────────┼─▶ http/server ──▶ http/handlers  │
//!                          │       │                │         │
//!     Client Response      │       ▼                ▼         │
//!     ◀────────────────────┼── TraceLayer     "Hello, World!" │
//!                          │                                  │
//!                          │  ┌────────────────────────────┐  │
//!                          │  │   Cross-Cutting Concerns   │  │
//!                          │  │  config  lifecycle  logging│  │
//!                          │  └────────────────────────────┘  │
//!                          └──────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
