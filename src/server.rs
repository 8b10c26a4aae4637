//! HTTP server initialization and runtime setup.
//!
//! Builds the catalog facade, binds the listener and runs Axum until a
//! shutdown signal arrives.

use crate::application::HBnBFacade;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - One in-memory facade shared by all requests
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// The catalog lives only in memory; final entity counts are logged on exit.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let facade = Arc::new(HBnBFacade::in_memory(config.unresolved_amenities));
    tracing::info!(
        unresolved_amenities = %config.unresolved_amenities,
        "Catalog initialized"
    );

    let state = AppState::new(facade.clone());
    let app = app_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let counts = facade.counts().await;
    tracing::info!(
        users = counts.users,
        places = counts.places,
        reviews = counts.reviews,
        amenities = counts.amenities,
        "Server shutdown complete, in-memory catalog discarded"
    );

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
