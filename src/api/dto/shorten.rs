//! DTOs for the create endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// Destination URL. Typed loosely so that a missing or non-string value
    /// reaches the handler's validator (which answers 400 with the expected
    /// body) instead of being rejected by the JSON extractor.
    #[serde(default)]
    pub url: Option<Value>,

    /// Validity in minutes; defaults to 30 when absent.
    pub validity: Option<i64>,

    /// Optional custom shortcode, used verbatim.
    pub shortcode: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
