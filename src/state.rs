//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ShortenService, StatsService};
use crate::infrastructure::logging::RemoteLogger;
use crate::infrastructure::store::InMemoryUrlStore;

/// Application state shared across all handlers.
///
/// Services are long-lived and own the store; handlers never touch the store
/// directly. Cloning is cheap (Arcs and a channel sender).
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<InMemoryUrlStore>>,
    pub stats_service: Arc<StatsService<InMemoryUrlStore>>,
    pub logger: RemoteLogger,
}

impl AppState {
    /// Builds the state over one shared store.
    pub fn new(store: Arc<InMemoryUrlStore>, base_url: String, logger: RemoteLogger) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), base_url)),
            stats_service: Arc::new(StatsService::new(store)),
            logger,
        }
    }
}
