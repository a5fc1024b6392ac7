//! Web dashboard layer for browser-based UI.
//!
//! Provides the overview page. Uses Askama templates for server-side
//! rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration
//! - [`view`] - Pure mapping from load state to display values

pub mod handlers;
pub mod routes;
pub mod view;
