//! HTTP server initialization and runtime setup.
//!
//! Wires the resolver, store, and shortener service together, then runs the
//! Axum server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{ShortenerService, UrlValidator};
use crate::config::Config;
use crate::infrastructure::persistence::MemoryUrlRepository;
use crate::infrastructure::resolver::{DnsResolver, HostResolver};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// The store and the identifier counter are created here, once, and live
/// inside the service for the whole process. There is no startup state to
/// restore: the mapping begins empty.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or the
/// server errors at runtime.
pub async fn run(config: Config) -> Result<()> {
    let resolver: Arc<dyn HostResolver> = Arc::new(DnsResolver::new());
    let repository = Arc::new(MemoryUrlRepository::new());

    let validator = UrlValidator::new(
        resolver.clone(),
        Duration::from_millis(config.resolve_timeout_ms),
    );
    let shortener = Arc::new(ShortenerService::new(validator, repository));

    let state = AppState::new(shortener, resolver);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
    }
}
