//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod overview;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use overview::{current_overview_handler, overview_handler};
