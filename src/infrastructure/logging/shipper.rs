//! Shipper trait and error types.

use async_trait::async_trait;
use std::fmt;

use super::event::LogEvent;

/// Errors that can occur while shipping an event.
#[derive(Debug)]
pub enum ShipError {
    /// Transport-level failure (connect, timeout, serialization).
    Transport(String),
    /// The sink answered with a non-success status.
    Rejected(u16),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "log transport error: {}", e),
            Self::Rejected(status) => write!(f, "log sink rejected event with status {}", status),
        }
    }
}

impl std::error::Error for ShipError {}

/// Result type for shipping operations.
pub type ShipResult<T> = Result<T, ShipError>;

/// Trait for delivering log events to a sink.
///
/// Implementations must be thread-safe. Failures are absorbed by the caller
/// (the log worker); they must never disrupt request handling.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::HttpLogShipper`] - HTTP POST to the ingestion endpoint
/// - [`crate::infrastructure::logging::NullShipper`] - no-op for disabled shipping
#[async_trait]
pub trait LogShipper: Send + Sync {
    /// Delivers one event to the sink.
    async fn ship(&self, event: LogEvent) -> ShipResult<()>;
}
