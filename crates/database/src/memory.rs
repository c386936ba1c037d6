use crate::error::DbError;
use crate::repository::{HistoryFilter, HistoryRecord, HistorySort, HistoryStore};
use async_trait::async_trait;
use chrono::Utc;
use core_types::{Operation, SortDirection, SortField};
use std::cmp::Ordering;
use tokio::sync::Mutex;

/// An in-memory `HistoryStore` over a plain `Vec`.
///
/// Used by the test suites and by `serve --memory`; it implements the same
/// insertion-order and stable-sort semantics as the PostgreSQL store.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(sort: HistorySort, a: &HistoryRecord, b: &HistoryRecord) -> Ordering {
    let ord = match sort.field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Result => a
            .resultado
            .partial_cmp(&b.resultado)
            .unwrap_or(Ordering::Equal),
    };
    match sort.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn matches(filter: &HistoryFilter, record: &HistoryRecord) -> bool {
    if let Some(operacion) = filter.operacion {
        if record.operacion != operacion {
            return false;
        }
    }
    if let Some((start, end)) = filter.date_range {
        if record.date < start || record.date > end {
            return false;
        }
    }
    true
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
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
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn find(&self, filter: &HistoryFilter) -> Result<Vec<HistoryRecord>, DbError> {
        let records = self.records.lock().await;
        let mut out: Vec<HistoryRecord> = records
            .iter()
            .filter(|record| matches(filter, record))
            .cloned()
            .collect();
        if let Some(sort) = filter.sort {
            // Vec::sort_by is stable, so ties keep insertion order.
            out.sort_by(|a, b| compare(sort, a, b));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sort(field: SortField, direction: SortDirection) -> Option<HistorySort> {
        Some(HistorySort { field, direction })
    }

    #[tokio::test]
    async fn record_stamps_and_returns_the_persisted_form() {
        let store = MemoryHistoryStore::new();
        let before = Utc::now();
        let record = store
            .record(Operation::Multiply, &[2.0, 3.0], 6.0)
            .await
            .unwrap();
        assert_eq!(record.numeros, vec![2.0, 3.0]);
        assert_eq!(record.resultado, 6.0);
        assert!(record.date >= before && record.date <= Utc::now());
    }

    #[tokio::test]
    async fn operation_filter_round_trip() {
        let store = MemoryHistoryStore::new();
        store
            .record(Operation::Multiply, &[2.0, 3.0], 6.0)
            .await
            .unwrap();

        let multiplicaciones = store
            .find(&HistoryFilter {
                operacion: Some(Operation::Multiply),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(multiplicaciones.len(), 1);
        assert_eq!(multiplicaciones[0].resultado, 6.0);

        let sumas = store
            .find(&HistoryFilter {
                operacion: Some(Operation::Sum),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(sumas.is_empty());
    }

    #[tokio::test]
    async fn date_range_filter_is_inclusive_on_both_ends() {
        let store = MemoryHistoryStore::new();
        let record = store.record(Operation::Sum, &[1.0], 1.0).await.unwrap();

        let hit = store
            .find(&HistoryFilter {
                date_range: Some((record.date, record.date)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hit.len(), 1);

        let miss = store
            .find(&HistoryFilter {
                date_range: Some((
                    record.date - Duration::hours(2),
                    record.date - Duration::hours(1),
                )),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn result_sort_is_stable_for_ties() {
        let store = MemoryHistoryStore::new();
        // Two records share resultado 6; their numeros tell them apart.
        let fixtures = [
            (vec![3.0], 3.0),
            (vec![10.0], 10.0),
            (vec![7.0], 7.0),
            (vec![5.0], 5.0),
            (vec![6.0, 0.0], 6.0),
            (vec![0.0, 6.0], 6.0),
        ];
        for (numeros, resultado) in &fixtures {
            store
                .record(Operation::Sum, numeros, *resultado)
                .await
                .unwrap();
        }

        let ordered = store
            .find(&HistoryFilter {
                sort: sort(SortField::Result, SortDirection::Ascending),
                ..Default::default()
            })
            .await
            .unwrap();

        let resultados: Vec<f64> = ordered.iter().map(|r| r.resultado).collect();
        assert_eq!(resultados, vec![3.0, 5.0, 6.0, 6.0, 7.0, 10.0]);
        // The earlier-inserted tie stays first.
        assert_eq!(ordered[2].numeros, vec![6.0, 0.0]);
        assert_eq!(ordered[3].numeros, vec![0.0, 6.0]);
    }

    #[tokio::test]
    async fn no_sort_preserves_insertion_order_and_find_is_idempotent() {
        let store = MemoryHistoryStore::new();
        store.record(Operation::Sum, &[2.0], 2.0).await.unwrap();
        store.record(Operation::Subtract, &[9.0], 9.0).await.unwrap();
        store.record(Operation::Sum, &[1.0], 1.0).await.unwrap();

        let filter = HistoryFilter::default();
        let first = store.find(&filter).await.unwrap();
        let resultados: Vec<f64> = first.iter().map(|r| r.resultado).collect();
        assert_eq!(resultados, vec![2.0, 9.0, 1.0]);

        let second = store.find(&filter).await.unwrap();
        assert_eq!(first, second);
    }
}
