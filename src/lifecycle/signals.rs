//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGTERM/SIGINT and coordinator triggers into one shutdown event
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Whichever source fires first wins; the rest are ignored

use tokio::sync::broadcast;

/// Resolve when Ctrl-C, SIGTERM, or the shutdown coordinator fires.
pub async fn shutdown_signal(mut coordinator: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
        _ = coordinator.recv() => {}
    }

    tracing::info!("Shutdown signal received");
}
