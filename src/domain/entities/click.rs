//! Click entity representing a single successful redirect.

use chrono::{DateTime, Utc};

/// A click recorded when a short link is successfully redirected.
///
/// Captures per-redirect metadata: when the redirect happened, the client's
/// referring URL (if supplied) and a best-effort client network address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    /// Referring URL from the `Referer` header; absent when not provided.
    pub referrer: Option<String>,
    /// Client network address, or [`ClickInfo::UNKNOWN_LOCATION`].
    pub location: String,
}

impl ClickInfo {
    /// Sentinel used when the client address could not be determined.
    pub const UNKNOWN_LOCATION: &str = "unknown";

    /// Creates a new click record.
    ///
    /// A missing `location` falls back to the `"unknown"` sentinel so the
    /// stored history always carries a location string.
    pub fn new(
        timestamp: DateTime<Utc>,
        referrer: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            referrer,
            location: location.unwrap_or_else(|| Self::UNKNOWN_LOCATION.to_string()),
        }
    }
}
