//! Handler for short link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// Entry metadata, the total click count and the full click history in
/// insertion order. Expired entries still answer here.
///
/// # Errors
///
/// Returns 404 when the shortcode does not exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
