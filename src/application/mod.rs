//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls.
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::overview_service::OverviewService`] - Loads the five
//!   collections and keeps the latest overview snapshot

pub mod services;
