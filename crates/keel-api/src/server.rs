//! Server bootstrap: bind, serve, shut down cleanly

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{ApiResult, IntoApi};
use crate::http;
use crate::state::AppState;

/// Bind the listener for the given address.
///
/// Split from [`run`] so the caller can report the bound address before the
/// server starts blocking. Port 0 resolves to a real port here.
pub async fn bind(addr: SocketAddr) -> ApiResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_api_context(|| format!("failed to bind {addr}"))
}

/// Serve requests until Ctrl+C or SIGTERM arrives.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> ApiResult<()> {
    let local = listener
        .local_addr()
        .with_api_context(|| "failed to read local address".to_string())?;
    let router = http::router(state);

    info!(address = %local, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_api_context(|| "server failed".to_string())?;

    info!("server stopped");
    Ok(())
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
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
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}

// ============================================================================
// Tests
// ============================================================================
