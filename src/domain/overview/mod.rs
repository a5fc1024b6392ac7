//! Overview aggregation: from raw collections to an immutable snapshot.
//!
//! - [`snapshot`] - Counts, paid split, revenue estimate and ranked lists
//! - [`histogram`] - Courses per start month
//! - [`load_state`] - Loading / ready / failed state shared with the views

pub mod histogram;
pub mod load_state;
pub mod snapshot;

pub use histogram::{HISTOGRAM_MONTHS, MonthBucket, MonthKey, monthly_histogram};
pub use load_state::LoadState;
pub use snapshot::{Collections, RECENT_LIMIT, Snapshot, UPCOMING_LIMIT};
