//! Hardened HTTP Relay for Form Submissions
//!
//! Accepts form payloads on one endpoint and relays them verbatim to a
//! configured destination, with perimeter hardening in front.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 FORM RELAY                    │
//!                    │                                               │
//!   Client Request   │  ┌────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│ trace/ │──▶│ security │──▶│  /submit   │  │
//!                    │  │ req-id │   │ cors+hdrs│   │  handler   │  │
//!                    │  └────────┘   │ +limiter │   └─────┬──────┘  │
//!                    │               └──────────┘         │         │
//!                    │                                    ▼         │
//!   Client Response  │  ┌─────────────┐          ┌────────────┐     │
//!   ◀────────────────┼──│ pass-through│◀─────────│  forward   │◀────┼── Destination
//!                    │  │ status+body │          │  client    │     │
//!                    │  └─────────────┘          └────────────┘     │
//!                    └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use form_relay::config::loader::load_config;
use form_relay::http::HttpServer;
use form_relay::lifecycle::Shutdown;
use form_relay::observability::logging;

#[derive(Parser)]
#[command(name = "form-relay")]
#[command(about = "Hardened relay for form submissions", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Fail fast: a missing or malformed destination URL aborts startup here,
    // before the listener binds.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        destination = %config.forward.destination_url,
        rate_limit_enabled = config.rate_limit.enabled,
        "Configuration loaded"
    );

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
