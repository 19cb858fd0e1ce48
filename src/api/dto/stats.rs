//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::UrlStats;
use crate::domain::entities::ClickInfo;

/// Stats projection for one short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    pub click_history: Vec<ClickRecord>,
}

/// One recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub timestamp: DateTime<Utc>,
    /// Omitted entirely when the client sent no referrer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    pub location: String,
}

impl From<ClickInfo> for ClickRecord {
    fn from(click: ClickInfo) -> Self {
        Self {
            timestamp: click.timestamp,
            referrer: click.referrer,
            location: click.location,
        }
    }
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            shortcode: stats.shortcode,
            original_url: stats.original_url,
            created_at: stats.created_at,
            expiry: stats.expiry,
            total_clicks: stats.total_clicks,
            click_history: stats.click_history.into_iter().map(Into::into).collect(),
        }
    }
}
