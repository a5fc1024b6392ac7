//! Domain layer containing business entities and logic.
//!
//! Defines the course administration's entities, the repository interface
//! used to read them, and the overview aggregation built on top.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`overview`] - Snapshot aggregation and monthly histogram
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Aggregation is pure: given the same collections and date it yields the
//!   same snapshot

pub mod entities;
pub mod overview;
pub mod repositories;
