//! Service layer.

mod shorten_service;
mod stats_service;

pub use shorten_service::{CreatedEntry, ShortenService};
pub use stats_service::{StatsService, UrlStats};
