//! Core domain entities of the course administration.
//!
//! Entities are read-only to the dashboard: they are loaded from the record
//! source and never written back.
//!
//! # Entity Types
//!
//! - [`Kurs`] - A course with title, start date and price
//! - [`Anmeldung`] - A registration with a paid flag
//! - [`Dozent`], [`Teilnehmer`], [`Raum`] - Counted directory records

pub mod anmeldung;
pub mod directory;
pub mod kurs;

pub use anmeldung::Anmeldung;
pub use directory::{Dozent, Raum, Teilnehmer};
pub use kurs::Kurs;
