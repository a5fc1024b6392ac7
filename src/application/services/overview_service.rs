//! Overview loading service.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::domain::overview::{Collections, LoadState, Snapshot};
use crate::domain::repositories::RecordSource;
use crate::error::{AppError, LoadError};

/// The state visible to readers, tagged with the load that produced it.
struct Published {
    generation: u64,
    state: LoadState,
}

/// Counts a running load for as long as its future is alive.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Service that loads the overview collections and aggregates them.
///
/// The five fetches run concurrently and are joined: the first failure aborts
/// the load and no partial snapshot is produced. The latest [`LoadState`] is
/// kept so it can be inspected without fetching again.
///
/// The published state changes only when a load completes, and is replaced
/// as a whole. Every load takes a generation number when it starts; a load
/// finishing after a newer one has already been published is discarded. A
/// load whose future is dropped publishes nothing.
pub struct OverviewService<R: RecordSource + ?Sized = dyn RecordSource> {
    source: Arc<R>,
    published: RwLock<Published>,
    next_generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl<R: RecordSource + ?Sized> OverviewService<R> {
    /// Creates a new overview service in the [`LoadState::Loading`] state.
    pub fn new(source: Arc<R>) -> Self {
        Self {
            source,
            published: RwLock::new(Published {
                generation: 0,
                state: LoadState::Loading,
            }),
            next_generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Loads a fresh snapshot as of today's date (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the collection whose fetch failed.
    pub async fn load(&self) -> Result<Arc<Snapshot>, LoadError> {
        self.load_at(Utc::now().date_naive()).await
    }

    /// Loads a fresh snapshot, treating `today` as the current date.
    ///
    /// The caller always receives its own result, even when a newer load has
    /// been published in the meantime.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the collection whose fetch failed.
    pub async fn load_at(&self, today: NaiveDate) -> Result<Arc<Snapshot>, LoadError> {
        let generation = self.next_generation.fetch_add(1, Ordering::AcqRel) + 1;
        let _in_flight = InFlight::enter(&self.in_flight);

        let result = self
            .fetch_collections()
            .await
            .map(|collections| Arc::new(Snapshot::aggregate(collections, today)));

        match &result {
            Ok(snapshot) => {
                tracing::info!(
                    generation,
                    kurse = snapshot.kurse,
                    anmeldungen = snapshot.anmeldungen,
                    bezahlt = snapshot.bezahlt,
                    "Overview loaded"
                );
                self.publish(generation, LoadState::Ready(Arc::clone(snapshot)))
                    .await;
            }
            Err(e) => {
                tracing::error!(generation, collection = e.collection, error = %e.source, "Overview load failed");
                self.publish(generation, LoadState::Failed).await;
            }
        }

        result
    }

    /// Loads a fresh snapshot and returns the resulting state.
    ///
    /// Failures are logged and reflected as [`LoadState::Failed`].
    pub async fn refresh(&self) -> LoadState {
        match self.load().await {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(_) => LoadState::Failed,
        }
    }

    /// Returns the published state while another load is running, and
    /// otherwise loads a fresh one.
    ///
    /// Before the first load completes this yields [`LoadState::Loading`].
    pub async fn refresh_or_current(&self) -> LoadState {
        if self.is_loading() {
            self.current().await
        } else {
            self.refresh().await
        }
    }

    /// Returns the state left by the most recent completed load.
    pub async fn current(&self) -> LoadState {
        self.published.read().await.state.clone()
    }

    /// Whether a load is currently running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Checks whether the record source is reachable.
    pub async fn source_healthy(&self) -> bool {
        self.source.health_check().await
    }

    async fn publish(&self, generation: u64, state: LoadState) {
        let mut published = self.published.write().await;
        if generation < published.generation {
            tracing::debug!(
                generation,
                published = published.generation,
                "Discarding superseded overview load"
            );
            return;
        }
        *published = Published { generation, state };
    }

    async fn fetch_collections(&self) -> Result<Collections, LoadError> {
        let (kurse, dozenten, teilnehmer, raeume, anmeldungen) = tokio::try_join!(
            fetch("kurse", self.source.fetch_kurse()),
            fetch("dozenten", self.source.fetch_dozenten()),
            fetch("teilnehmer", self.source.fetch_teilnehmer()),
            fetch("raeume", self.source.fetch_raeume()),
            fetch("anmeldungen", self.source.fetch_anmeldungen()),
        )?;

        tracing::debug!(
            kurse = kurse.len(),
            dozenten = dozenten.len(),
            teilnehmer = teilnehmer.len(),
            raeume = raeume.len(),
            anmeldungen = anmeldungen.len(),
            "Collections fetched"
        );

        Ok(Collections {
            kurse,
            dozenten,
            teilnehmer,
            raeume,
            anmeldungen,
        })
    }
}

async fn fetch<T>(
    collection: &'static str,
    request: impl Future<Output = Result<Vec<T>, AppError>>,
) -> Result<Vec<T>, LoadError> {
    request
        .await
        .map_err(|source| LoadError::new(collection, source))
}
