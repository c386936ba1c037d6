use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_types::{Operation, SortDirection, SortField};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPool;
use sqlx::Row;
use std::str::FromStr;

/// A persisted operation: inputs, result, kind and the UTC instant it was
/// computed. Records are append-only; nothing in the application mutates or
/// deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub numeros: Vec<f64>,
    pub resultado: f64,
    pub operacion: Operation,
    pub date: DateTime<Utc>,
}

/// How a history query should be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// The filter/sort specification a history query hands to the store.
///
/// Filters AND-compose. `date_range` is a pair of UTC instants, both ends
/// inclusive; the calendar-day arithmetic happens upstream so the store only
/// ever compares absolute instants. No sort means insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    pub operacion: Option<Operation>,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub sort: Option<HistorySort>,
}

/// The storage contract for operation history.
///
/// This trait is what the engine records to and queries from, allowing the
/// underlying implementation (PostgreSQL or in-memory) to be swapped out.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Stamps the current UTC instant, persists the record, and returns it.
    async fn record(
        &self,
        operacion: Operation,
        numeros: &[f64],
        resultado: f64,
    ) -> Result<HistoryRecord, DbError>;

    /// Fetches records matching `filter`, ordered per its sort (insertion
    /// order when none). Ties keep insertion order.
    async fn find(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>, DbError>;
}

/// The PostgreSQL-backed `HistoryStore`.
#[derive(Debug, Clone)]
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    /// Creates a new `PgHistoryStore` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a sort spec onto an ORDER BY clause. Every variant carries an `id`
/// tiebreak so equal-key rows keep insertion order.
fn order_by_clause(sort: Option<HistorySort>) -> &'static str {
    match sort {
        None => "id ASC",
        Some(HistorySort {
            field: SortField::Date,
            direction: SortDirection::Ascending,
        }) => "date ASC, id ASC",
        Some(HistorySort {
            field: SortField::Date,
            direction: SortDirection::Descending,
        }) => "date DESC, id ASC",
        Some(HistorySort {
            field: SortField::Result,
            direction: SortDirection::Ascending,
        }) => "resultado ASC, id ASC",
        Some(HistorySort {
            field: SortField::Result,
            direction: SortDirection::Descending,
        }) => "resultado DESC, id ASC",
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn record(
        &self,
        operacion: Operation,
        numeros: &[f64],
        resultado: f64,
    ) -> Result<HistoryRecord, DbError> {
        let record = HistoryRecord {
            numeros: numeros.to_vec(),
            resultado,
            operacion,
            date: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO historial (operacion, numeros, resultado, date) VALUES ($1, $2, $3, $4)",
        )
        .bind(record.operacion.as_str())
        .bind(&record.numeros)
        .bind(record.resultado)
        .bind(record.date)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>, DbError> {
        let (start, end) = match filter.date_range {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };

        // One static statement covers every filter combination; a NULL bind
        // disables the corresponding predicate.
        let sql = format!(
            "SELECT operacion, numeros, resultado, date FROM historial \
             WHERE ($1::text IS NULL OR operacion = $1) \
               AND ($2::timestamptz IS NULL OR date >= $2) \
               AND ($3::timestamptz IS NULL OR date <= $3) \
             ORDER BY {}",
            order_by_clause(filter.sort)
        );

        let rows = sqlx::query(&sql)
            .bind(filter.operacion.map(|op| op.as_str()))
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let operacion_raw: String = row.get("operacion");
                let operacion = Operation::from_str(&operacion_raw).map_err(|_| {
                    DbError::Malformed(format!("unknown operation kind '{operacion_raw}'"))
                })?;
                Ok(HistoryRecord {
                    operacion,
                    numeros: row.get("numeros"),
                    resultado: row.get("resultado"),
                    date: row.get("date"),
                })
            })
            .collect()
    }
}
