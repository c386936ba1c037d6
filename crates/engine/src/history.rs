use crate::error::EngineError;
use crate::CalcEngine;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use core_types::{Operation, SortDirection, SortField};
use database::{HistoryFilter, HistoryRecord, HistorySort};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The raw query parameters of the history endpoint, all optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub operacion: Option<String>,
    pub fecha: Option<String>,
    #[serde(rename = "ordenarPor")]
    pub ordenar_por: Option<String>,
    pub orden: Option<String>,
}

/// Rejections for invalid history query parameters. Each variant carries the
/// raw value so the response can echo it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryQueryError {
    #[error("Operacion no soportada")]
    UnsupportedOperation(String),

    #[error("Fecha no valida")]
    InvalidDate(String),

    #[error("Ordenar por no soportado")]
    UnsupportedSortField(String),

    #[error("Orden no soportado")]
    UnsupportedSortDirection(String),
}

/// A history record projected for output: the timestamp is rendered in the
/// configured display zone, not UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub numeros: Vec<f64>,
    pub resultado: f64,
    pub date: String,
    pub operacion: Operation,
}

/// Translates raw parameters into a storage filter/sort specification.
///
/// Parameters are validated in a fixed order (operacion, fecha, ordenarPor,
/// orden); the first invalid one fails the whole query before storage is
/// touched. `orden` without `ordenarPor` is validated but ignored; a missing
/// `orden` next to an `ordenarPor` sorts descending.
pub fn parse_params(
    params: &HistoryParams,
    display_offset: FixedOffset,
) -> Result<HistoryFilter, HistoryQueryError> {
    let operacion = match &params.operacion {
        Some(raw) => Some(
            raw.parse::<Operation>()
                .map_err(|()| HistoryQueryError::UnsupportedOperation(raw.clone()))?,
        ),
        None => None,
    };

    let fecha = match &params.fecha {
        Some(raw) => {
            Some(parse_fecha(raw).ok_or_else(|| HistoryQueryError::InvalidDate(raw.clone()))?)
        }
        None => None,
    };

    let field = match &params.ordenar_por {
        Some(raw) => Some(
            raw.parse::<SortField>()
                .map_err(|()| HistoryQueryError::UnsupportedSortField(raw.clone()))?,
        ),
        None => None,
    };

    let direction = match &params.orden {
        Some(raw) => Some(
            raw.parse::<SortDirection>()
                .map_err(|()| HistoryQueryError::UnsupportedSortDirection(raw.clone()))?,
        ),
        None => None,
    };

    Ok(HistoryFilter {
        operacion,
        date_range: fecha.map(|day| day_bounds(day, display_offset)),
        sort: field.map(|field| HistorySort {
            field,
            direction: direction.unwrap_or(SortDirection::Descending),
        }),
    })
}

/// Accepts a plain calendar date or a full datetime, keeping its date part.
fn parse_fecha(raw: &str) -> Option<NaiveDate> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date())
}

/// The calendar day 00:00:00 through 23:59:59, both inclusive, interpreted
/// in the display zone and converted to the UTC instants storage compares.
fn day_bounds(day: NaiveDate, display_offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_hms_opt(0, 0, 0).unwrap();
    let end = day.and_hms_opt(23, 59, 59).unwrap();
    // Fixed offsets have no DST gaps, so the conversion is unambiguous.
    (
        start
            .and_local_timezone(display_offset)
            .unwrap()
            .with_timezone(&Utc),
        end.and_local_timezone(display_offset)
            .unwrap()
            .with_timezone(&Utc),
    )
}

/// Reshapes storage records for output, rendering timestamps in the display
/// zone.
pub fn project(records: Vec<HistoryRecord>, display_offset: FixedOffset) -> Vec<HistoryEntry> {
    records
        .into_iter()
        .map(|record| HistoryEntry {
            numeros: record.numeros,
            resultado: record.resultado,
            date: record.date.with_timezone(&display_offset).to_rfc3339(),
            operacion: record.operacion,
        })
        .collect()
}

impl CalcEngine {
    /// Answers a history query: validate parameters, fetch, project.
    pub async fn query_history(
        &self,
        params: &HistoryParams,
        display_offset: FixedOffset,
    ) -> Result<Vec<HistoryEntry>, EngineError> {
        let filter = parse_params(params, display_offset)?;
        let records = self.history.find(&filter).await?;
        Ok(project(records, display_offset))
    }
}
