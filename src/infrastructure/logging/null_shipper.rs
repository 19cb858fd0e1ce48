//! No-op shipper for disabled log shipping.

use async_trait::async_trait;
use tracing::debug;

use super::event::LogEvent;
use super::shipper::{LogShipper, ShipResult};

/// A shipper that discards every event.
///
/// Used when `LOG_API` is not configured and in tests that don't assert on
/// shipped events.
pub struct NullShipper;

impl NullShipper {
    /// Creates a new NullShipper instance.
    pub fn new() -> Self {
        debug!("Using NullShipper (remote log shipping disabled)");
        Self
    }
}

impl Default for NullShipper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogShipper for NullShipper {
    async fn ship(&self, _event: LogEvent) -> ShipResult<()> {
        Ok(())
    }
}
