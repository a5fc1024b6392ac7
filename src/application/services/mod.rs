//! Business logic services for the application layer.

pub mod overview_service;

pub use overview_service::OverviewService;
