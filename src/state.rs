use std::sync::Arc;

use crate::application::services::OverviewService;
use crate::domain::repositories::RecordSource;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub overview_service: Arc<OverviewService>,
}

impl AppState {
    /// Builds the state around a record source.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            overview_service: Arc::new(OverviewService::new(source)),
        }
    }
}
