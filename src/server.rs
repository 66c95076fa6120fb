//! HTTP server initialization and runtime setup.
//!
//! Wires the store, generator, service and metrics together and runs the
//! Axum server until shutdown.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::metrics::Metrics;
use crate::infrastructure::persistence::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The mapping store lives for the lifetime of this call; constructing it
/// here (rather than as a global) ties its lifecycle to the process that
/// manages startup and shutdown.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or
/// the server encounters a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository,
        CodeGenerator::new(),
        config.base_url.clone(),
    ));
    let metrics = Arc::new(Metrics::new());

    let state = AppState::new(link_service, metrics);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    // ConnectInfo feeds the per-IP rate limiter.
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped gracefully");
    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
