//! Handler for short link creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,          // optional, minutes
///   "shortcode": "my-code"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"shortLink": "...", "expiry": "..."}`.
///
/// # Errors
///
/// Returns 400 when `url` is missing, not a string, or empty.
/// Returns 409 when the shortcode is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = payload
        .url
        .as_ref()
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing or invalid 'url'"))?;

    let created = state
        .shorten_service
        .create_entry(url.to_string(), payload.validity, payload.shortcode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: created.short_link,
            expiry: created.expiry,
        }),
    ))
}
