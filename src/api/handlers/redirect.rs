//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::infrastructure::logging::{LogLevel, LogPackage};
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// Three terminal outcomes, checked in order:
///
/// 1. Unknown code → 404, warn event shipped
/// 2. Past expiry → 410, warn event shipped, no click recorded
/// 3. Live → one click appended (referrer from the `Referer` header, location
///    from the peer address), info event shipped, `302 Found` to the
///    destination
///
/// The response is decided before any remote logging outcome; shipping is
/// fire-and-forget.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let location = Some(addr.ip().to_string());

    match state.shorten_service.redirect(&code, referrer, location).await {
        Ok(original_url) => {
            state.logger.log(
                LogLevel::Info,
                LogPackage::Route,
                format!("Redirecting shortcode {} to {}", code, original_url),
            );

            found_response(&original_url)
        }
        Err(err @ AppError::NotFound { .. }) => {
            state.logger.log(
                LogLevel::Warn,
                LogPackage::Handler,
                format!("Shortcode not found: {}", code),
            );

            Err(err)
        }
        Err(err @ AppError::Expired { .. }) => {
            state.logger.log(
                LogLevel::Warn,
                LogPackage::Handler,
                format!("Shortcode expired: {}", code),
            );

            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Builds a `302 Found` response by hand: axum's `Redirect` helpers emit
/// 303/307/308, and this endpoint's contract is 302.
fn found_response(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url)
        .map_err(|_| AppError::internal(format!("stored URL is not a valid header value: {}", url)))?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);

    Ok(response)
}
