//! Lifecycle of the overview data.

use std::sync::Arc;

use super::snapshot::Snapshot;

/// Where the overview currently stands.
///
/// A failed load carries no data; the previous snapshot is dropped so the
/// dashboard never mixes stale and fresh numbers.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<Snapshot>),
    Failed,
}

impl LoadState {
    /// The loaded snapshot, if any.
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            Self::Loading | Self::Failed => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short machine-readable status: `loading`, `ready` or `failed`.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed => "failed",
        }
    }
}
