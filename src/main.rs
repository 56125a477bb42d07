//! Customer gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌──────────┐    ┌──────────────┐    ┌────────────┐
//!     ──────────────────▶│   http   │───▶│  customers   │───▶│  upstream  │──▶ GET /auth
//!                        │  server  │    │   pipeline   │    │  clients   │──▶ GET /wiremock
//!     Client Response    └──────────┘    └──────┬───────┘    └────────────┘
//!     ◀──────────────────────────────────  translator
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use customer_gateway::config::{load_config, GatewayConfig};
use customer_gateway::lifecycle::{wait_for_signal, Shutdown};
use customer_gateway::observability::{logging, metrics};
use customer_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "customer-gateway")]
#[command(about = "HTTP gateway in front of the customer data service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("customer-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        auth_step = ?config.pipeline.auth,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
