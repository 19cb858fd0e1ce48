//! Entry entity representing a shortcode to URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::click::ClickInfo;

/// A stored short URL entry.
///
/// `id`, `shortcode`, `original_url`, `created_at` and `expiry` are fixed at
/// creation; only `clicks` grows, one record per successful redirect, in
/// insertion order.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    pub id: Uuid,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    /// Redirection is refused after this instant. The entry itself is never
    /// removed and stays queryable for stats.
    pub expiry: DateTime<Utc>,
    pub clicks: Vec<ClickInfo>,
}

impl UrlEntry {
    /// Creates a new entry with a fresh id and an empty click history.
    pub fn new(
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expiry: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            shortcode,
            original_url,
            created_at,
            expiry,
            clicks: Vec::new(),
        }
    }

    /// Returns true once the current time is strictly past `expiry`.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiry
    }

    /// Appends a click to the history.
    pub fn record_click(&mut self, click: ClickInfo) {
        self.clicks.push(click);
    }

    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}
