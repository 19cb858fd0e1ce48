//! Best-effort shipping of structured log events to an external sink.
//!
//! Handlers hold a cloneable [`RemoteLogger`] and enqueue [`LogEvent`]s onto a
//! bounded channel without blocking. A background worker drains the channel
//! and pushes each event through a [`LogShipper`]:
//!
//! - [`HttpLogShipper`] - POSTs JSON to the configured ingestion endpoint
//! - [`NullShipper`] - no-op when shipping is disabled or under test
//!
//! Shipping never touches the request path: a full queue drops the event and
//! a failed ship is only recorded to the local diagnostic log.

mod event;
mod http_shipper;
mod logger;
mod null_shipper;
mod shipper;
mod worker;

pub use event::{LogEvent, LogLevel, LogPackage, LogStack};
pub use http_shipper::HttpLogShipper;
pub use logger::RemoteLogger;
pub use null_shipper::NullShipper;
pub use shipper::{LogShipper, ShipError, ShipResult};
pub use worker::run_log_worker;
