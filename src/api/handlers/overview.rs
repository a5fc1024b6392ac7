//! Handlers for the overview snapshot.

use axum::{Json, extract::State};

use crate::api::dto::overview::{CurrentOverviewResponse, OverviewResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Loads a fresh overview snapshot.
///
/// # Endpoint
///
/// `GET /api/overview`
///
/// # Response
///
/// Counts per collection, paid split, estimated revenue, the next five
/// courses, the six latest registrations and courses per month.
///
/// # Errors
///
/// Returns 503 Service Unavailable (`load_failed`) if any collection could
/// not be fetched. No partial data is returned.
pub async fn overview_handler(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, AppError> {
    let snapshot = state.overview_service.load().await?;
    Ok(Json(OverviewResponse::from(snapshot.as_ref())))
}

/// Returns the result of the most recent load without fetching.
///
/// # Endpoint
///
/// `GET /api/overview/current`
///
/// # Response
///
/// ```json
/// { "status": "ready", "snapshot": { "counts": { "kurse": 12, ... }, ... } }
/// ```
///
/// `snapshot` is omitted while loading and after a failed load.
pub async fn current_overview_handler(
    State(state): State<AppState>,
) -> Json<CurrentOverviewResponse> {
    let current = state.overview_service.current().await;
    Json(CurrentOverviewResponse::from(&current))
}
