//! HTTP server initialization and runtime setup.
//!
//! Wires the store, log worker, application state and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::logging::{
    HttpLogShipper, LogShipper, NullShipper, RemoteLogger, run_log_worker,
};
use crate::infrastructure::store::InMemoryUrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory URL store (empty, process-lifetime)
/// - The log shipper (HTTP when `LOG_API` is set, no-op otherwise) and its
///   background worker
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server runtime errors out.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryUrlStore::new());

    let shipper: Arc<dyn LogShipper> = match &config.log_api {
        Some(endpoint) => {
            tracing::info!("Log shipping enabled ({})", endpoint);
            Arc::new(HttpLogShipper::new(
                endpoint.clone(),
                config.log_api_key.clone(),
            ))
        }
        None => {
            tracing::info!("Log shipping disabled (NullShipper)");
            Arc::new(NullShipper::new())
        }
    };

    let (logger, log_rx) = RemoteLogger::channel(config.log_queue_capacity);
    tokio::spawn(run_log_worker(log_rx, shipper));
    tracing::info!("Log worker started");

    let state = AppState::new(store, config.base_url.clone(), logger);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
