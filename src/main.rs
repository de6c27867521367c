//! HealthConsult server
//!
//! Entry point: configuration, logging, then the HTTP server.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;

use healthconsult::config::AppConfig;
use healthconsult::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.logging);

    tracing::info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir,
        chat_delay_ms = config.simulation.chat_delay_ms,
        contact_delay_ms = config.simulation.contact_delay_ms,
        "Configuration loaded"
    );

    server::start_server(Arc::new(config)).await
}
