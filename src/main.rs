//! Greeting Service
//!
//! A minimal HTTP service built with Tokio and Axum. Serves a single route,
//! `GET /` → `"Hello, World!"`, and refuses to start when the `API_KEY`
//! environment variable is absent or empty.
//!
//! Startup order:
//! 1. Initialize logging
//! 2. Load configuration (defaults, or the file named by `GREETER_CONFIG`)
//! 3. Require `API_KEY` — abort before binding if missing
//! 4. Bind the TCP listener and serve until shutdown

use tokio::net::TcpListener;

use greeter::config::{loader, validation};
use greeter::http::HttpServer;
use greeter::lifecycle::Shutdown;
use greeter::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    tracing::info!("greeter v0.1.0 starting");

    let config = loader::load_or_default()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Startup guard: must fail before any socket is bound.
    validation::require_api_key()?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
