//! Instructors, participants and rooms.
//!
//! The overview only counts these records, so they carry little more than
//! their identity.

use serde::Serialize;

/// An instructor teaching courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dozent {
    pub id: i64,
    pub name: Option<String>,
}

/// A person attending courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teilnehmer {
    pub id: i64,
    pub name: Option<String>,
}

/// A room courses take place in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Raum {
    pub id: i64,
    pub raumname: Option<String>,
}
