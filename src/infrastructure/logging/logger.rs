//! Cloneable handle for enqueueing remote log events.

use tokio::sync::mpsc;

use super::event::{LogEvent, LogLevel, LogPackage};

/// Handle used by handlers to enqueue log events for shipping.
///
/// Enqueueing never blocks: when the queue is full or the worker has stopped,
/// the event is dropped and only a local debug line is emitted. The HTTP
/// response is decided before and independently of any logging outcome.
#[derive(Clone)]
pub struct RemoteLogger {
    tx: mpsc::Sender<LogEvent>,
}

impl RemoteLogger {
    pub fn new(tx: mpsc::Sender<LogEvent>) -> Self {
        Self { tx }
    }

    /// Creates a logger together with the receiving end of its queue.
    ///
    /// The receiver is handed to
    /// [`run_log_worker`](super::worker::run_log_worker) in production and
    /// held directly by integration tests to assert on emitted events.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<LogEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Enqueues a backend-stack event, fire-and-forget.
    pub fn log(&self, level: LogLevel, package: LogPackage, message: impl Into<String>) {
        let event = LogEvent::backend(level, package, message);

        if let Err(e) = self.tx.try_send(event) {
            tracing::debug!(error = %e, "remote log event dropped");
        }
    }
}
