//! API route configuration.

use crate::api::handlers::{current_overview_handler, overview_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON overview routes.
///
/// # Endpoints
///
/// - `GET /overview`          - Load and return a fresh snapshot
/// - `GET /overview/current`  - State of the most recent load
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview_handler))
        .route("/overview/current", get(current_overview_handler))
}
