//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`              - Create a short link
//! - `GET  /stats/{code}`  - Link statistics
//! - `GET  /{code}`        - Short link redirect (catch-all)
//!
//! The stats route is registered before the catch-all redirect route so the
//! literal `stats` segment is never treated as a shortcode.
//!
//! # Middleware
//!
//! - **Panic recovery** - A panicking handler answers an opaque 500 instead
//!   of killing the connection
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::any::Any;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Maps a caught handler panic to the same opaque 500 body that
/// [`crate::error::AppError::Internal`] produces; the panic detail stays in
/// the local log.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(error = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal server error" })),
    )
        .into_response()
}
