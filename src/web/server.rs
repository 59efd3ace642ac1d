//! Dashboard Server
//! Serves the precomputed page on a single route.

use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use std::net::SocketAddr;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    page: Bytes,
}

/// Router exposing the rendered page at `/`. Every other path is a 404.
pub fn router(page: String) -> Router {
    let state = AppState {
        page: Bytes::from(page),
    };

    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(st): State<AppState>) -> Html<Bytes> {
    debug!(bytes = st.page.len(), "serving dashboard");
    Html(st.page)
}

/// Bind `addr` and serve `page` until Ctrl-C.
pub async fn serve(addr: SocketAddr, page: String) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("dashboard listening on http://{}/", addr);

    axum::serve(listener, router(page))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
