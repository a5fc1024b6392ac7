#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use kursmanager_dashboard::domain::entities::{Anmeldung, Dozent, Kurs, Raum, Teilnehmer};
use kursmanager_dashboard::domain::repositories::RecordSource;
use kursmanager_dashboard::error::AppError;
use kursmanager_dashboard::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::Notify;

/// Record source backed by plain vectors.
///
/// `failing` names a collection whose fetch returns an error. With a `gate`
/// set, `fetch_kurse` waits until the gate is notified.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    pub kurse: Vec<Kurs>,
    pub dozenten: Vec<Dozent>,
    pub teilnehmer: Vec<Teilnehmer>,
    pub raeume: Vec<Raum>,
    pub anmeldungen: Vec<Anmeldung>,
    pub failing: Option<&'static str>,
    pub healthy: bool,
    pub gate: Option<Arc<Notify>>,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self {
            kurse: vec![],
            dozenten: vec![],
            teilnehmer: vec![],
            raeume: vec![],
            anmeldungen: vec![],
            failing: None,
            healthy: true,
            gate: None,
        }
    }
}

impl InMemorySource {
    fn check(&self, collection: &str) -> Result<(), AppError> {
        if self.failing == Some(collection) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_kurse(&self) -> Result<Vec<Kurs>, AppError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.check("kurse")?;
        Ok(self.kurse.clone())
    }

    async fn fetch_dozenten(&self) -> Result<Vec<Dozent>, AppError> {
        self.check("dozenten")?;
        Ok(self.dozenten.clone())
    }

    async fn fetch_teilnehmer(&self) -> Result<Vec<Teilnehmer>, AppError> {
        self.check("teilnehmer")?;
        Ok(self.teilnehmer.clone())
    }

    async fn fetch_raeume(&self) -> Result<Vec<Raum>, AppError> {
        self.check("raeume")?;
        Ok(self.raeume.clone())
    }

    async fn fetch_anmeldungen(&self) -> Result<Vec<Anmeldung>, AppError> {
        self.check("anmeldungen")?;
        Ok(self.anmeldungen.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference date for tests that pass "today" explicitly.
pub fn today() -> NaiveDate {
    date(2026, 10, 19)
}

/// A date after any real "today" the handlers can see.
pub fn far_future(day: u32) -> NaiveDate {
    date(2099, 1, day)
}

/// A date before any real "today" the handlers can see.
pub fn far_past(day: u32) -> NaiveDate {
    date(2001, 1, day)
}

pub fn kurs(id: i64, titel: &str, start: Option<NaiveDate>, preis: Option<f64>) -> Kurs {
    Kurs::new(id, Some(titel.to_string()), start, preis)
}

pub fn anmeldung(id: i64, bezahlt: Option<bool>) -> Anmeldung {
    Anmeldung::new(id, None, None, Some(date(2026, 9, id as u32)), bezahlt)
}

/// Three priced courses, one instructor, two participants, one room and
/// three registrations of which two are paid.
pub fn sample_source() -> InMemorySource {
    InMemorySource {
        kurse: vec![
            kurs(1, "Aquarellmalerei", Some(far_future(14)), Some(100.0)),
            kurs(2, "Python für Einsteiger", Some(far_past(10)), Some(200.0)),
            kurs(3, "Erste Hilfe", Some(far_future(3)), Some(0.0)),
        ],
        dozenten: vec![Dozent {
            id: 1,
            name: Some("Frau Lindner".to_string()),
        }],
        teilnehmer: vec![
            Teilnehmer { id: 1, name: None },
            Teilnehmer { id: 2, name: None },
        ],
        raeume: vec![Raum {
            id: 1,
            raumname: Some("Seminarraum 2".to_string()),
        }],
        anmeldungen: vec![anmeldung(1, Some(true)), anmeldung(2, Some(true)), anmeldung(3, None)],
        ..Default::default()
    }
}

pub fn create_test_state(source: InMemorySource) -> AppState {
    let source: Arc<dyn RecordSource> = Arc::new(source);
    AppState::new(source)
}

pub async fn create_test_kurs(
    pool: &PgPool,
    titel: Option<&str>,
    startdatum: Option<NaiveDate>,
    preis: Option<f64>,
) -> i64 {
    sqlx::query_scalar("INSERT INTO kurse (titel, startdatum, preis) VALUES ($1, $2, $3) RETURNING id")
        .bind(titel)
        .bind(startdatum)
        .bind(preis)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_raum(pool: &PgPool, raumname: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO raeume (raumname) VALUES ($1) RETURNING id")
        .bind(raumname)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_teilnehmer(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO teilnehmer (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_anmeldung(
    pool: &PgPool,
    kurs_id: Option<i64>,
    bezahlt: Option<bool>,
    created_at: NaiveDateTime,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO anmeldungen (kurs_id, anmeldedatum, bezahlt, created_at) \
         VALUES ($1, $2, $3, $4::timestamp AT TIME ZONE 'UTC') RETURNING id",
    )
    .bind(kurs_id)
    .bind(created_at.date())
    .bind(bezahlt)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}
