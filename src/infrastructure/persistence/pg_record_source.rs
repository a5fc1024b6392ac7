//! PostgreSQL implementation of the record source.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Anmeldung, Dozent, Kurs, Raum, Teilnehmer};
use crate::domain::repositories::RecordSource;
use crate::error::AppError;

/// PostgreSQL repository for the overview collections.
///
/// Reads whole tables; the overview needs every row for its counts.
pub struct PgRecordSource {
    pool: Arc<PgPool>,
}

impl PgRecordSource {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct KursRow {
    id: i64,
    titel: Option<String>,
    startdatum: Option<NaiveDate>,
    preis: Option<f64>,
}

#[derive(FromRow)]
struct NamedRow {
    id: i64,
    name: Option<String>,
}

#[derive(FromRow)]
struct AnmeldungRow {
    id: i64,
    kurs_id: Option<i64>,
    teilnehmer_id: Option<i64>,
    anmeldedatum: Option<NaiveDate>,
    bezahlt: Option<bool>,
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn fetch_kurse(&self) -> Result<Vec<Kurs>, AppError> {
        let rows = sqlx::query_as::<_, KursRow>(
            r#"
            SELECT id, titel, startdatum, preis
            FROM kurse
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Kurs::new(row.id, row.titel, row.startdatum, row.preis))
            .collect())
    }

    async fn fetch_dozenten(&self) -> Result<Vec<Dozent>, AppError> {
        let rows = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM dozenten ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Dozent {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn fetch_teilnehmer(&self) -> Result<Vec<Teilnehmer>, AppError> {
        let rows = sqlx::query_as::<_, NamedRow>("SELECT id, name FROM teilnehmer ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Teilnehmer {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn fetch_raeume(&self) -> Result<Vec<Raum>, AppError> {
        let rows = sqlx::query_as::<_, NamedRow>(
            "SELECT id, raumname AS name FROM raeume ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Raum {
                id: row.id,
                raumname: row.name,
            })
            .collect())
    }

    async fn fetch_anmeldungen(&self) -> Result<Vec<Anmeldung>, AppError> {
        // Newest first: the overview lists the leading entries as recent.
        let rows = sqlx::query_as::<_, AnmeldungRow>(
            r#"
            SELECT id, kurs_id, teilnehmer_id, anmeldedatum, bezahlt
            FROM anmeldungen
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                Anmeldung::new(
                    row.id,
                    row.kurs_id,
                    row.teilnehmer_id,
                    row.anmeldedatum,
                    row.bezahlt,
                )
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
