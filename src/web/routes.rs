//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard pages.
///
/// # Endpoints
///
/// - `GET /dashboard` - Overview with KPIs, charts and recent items
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_handler))
}
