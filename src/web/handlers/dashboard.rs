//! Dashboard overview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::Utc;

use crate::state::AppState;
use crate::web::view::{self, DashboardView};

/// Template for the dashboard overview page.
///
/// Renders `templates/dashboard.html` with:
/// - Hero banner with paid/outstanding counts and estimated revenue
/// - Five KPI tiles linking to the collection listings
/// - Courses per month and payment status charts
/// - Upcoming courses and latest registrations
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: DashboardView,
    pub empty_bars: &'static str,
    pub empty_registrations: &'static str,
    pub empty_upcoming: &'static str,
    pub loading_text: &'static str,
}

impl DashboardTemplate {
    pub fn new(view: DashboardView) -> Self {
        Self {
            view,
            empty_bars: view::EMPTY_BARS,
            empty_registrations: view::EMPTY_REGISTRATIONS,
            empty_upcoming: view::EMPTY_UPCOMING,
            loading_text: view::LOADING_TEXT,
        }
    }
}

/// Loads fresh overview data and renders the dashboard.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// While another load is running the page shows the last published state
/// instead of starting a second one; before any load has completed that is
/// the loading screen, which reloads itself. A failed load still renders the
/// page, with zeroed counts and the empty states of every panel.
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let load_state = state.overview_service.refresh_or_current().await;
    DashboardTemplate::new(DashboardView::render(&load_state, Utc::now().date_naive()))
}
