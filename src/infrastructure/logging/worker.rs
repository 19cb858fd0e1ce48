//! Background worker draining the log event queue.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::event::LogEvent;
use super::shipper::LogShipper;

/// Receives events from the bounded channel and pushes them through the
/// shipper, one at a time, preserving enqueue order.
///
/// A failed ship is recorded locally and the event is dropped; the worker
/// keeps running until every sender handle is gone.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEvent>, shipper: Arc<dyn LogShipper>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = shipper.ship(event).await {
            tracing::error!(error = %e, "failed to ship log event");
        }
    }

    tracing::debug!("log worker stopped");
}
