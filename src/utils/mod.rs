//! Utility functions shared by the views and the admin CLI.
//!
//! - [`german_format`] - German date, currency and price formatting

pub mod german_format;
