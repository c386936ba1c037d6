//! # Calculadora Engine Crate
//!
//! The core request pipeline: classify an input sequence (`validator`),
//! reduce it to a result (`ops`), record it (`database::HistoryStore`), and
//! answer batch and history requests on top of that.
//!
//! The engine owns no state beyond the injected storage collaborator; every
//! call is an independent request/response transaction.

use core_types::{Operation, OperationOutcome, RawNumber};
use database::HistoryStore;
use std::sync::Arc;

pub mod batch;
pub mod error;
pub mod history;
pub mod ops;
pub mod validator;

pub use batch::{BatchItemOutcome, BatchStatus};
pub use error::EngineError;
pub use history::{HistoryEntry, HistoryParams, HistoryQueryError};

/// The central orchestrator for the arithmetic API.
#[derive(Clone)]
pub struct CalcEngine {
    history: Arc<dyn HistoryStore>,
}

impl CalcEngine {
    /// Creates a new `CalcEngine` recording to the given store.
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    /// Runs one operation end to end: validate, compute, record.
    ///
    /// The recorded history entry holds the parsed inputs and the result;
    /// domain failures surface before anything touches storage.
    pub async fn execute(
        &self,
        operacion: Operation,
        numeros: &[RawNumber],
    ) -> Result<OperationOutcome, EngineError> {
        let parsed = validator::validate(numeros)?;
        let resultado = ops::apply(operacion, &parsed)?;
        self.history.record(operacion, &parsed, resultado).await?;
        tracing::debug!(%operacion, resultado, "operation recorded");

        Ok(OperationOutcome {
            numeros: parsed,
            resultado,
            operacion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{HistoryFilter, MemoryHistoryStore};

    fn engine_with_store() -> (CalcEngine, Arc<MemoryHistoryStore>) {
        let store = Arc::new(MemoryHistoryStore::new());
        (CalcEngine::new(store.clone()), store)
    }

    fn nums(values: &[f64]) -> Vec<RawNumber> {
        values.iter().map(|n| RawNumber::from(*n)).collect()
    }

    #[tokio::test]
    async fn execute_records_exactly_one_history_entry() {
        let (engine, store) = engine_with_store();
        let outcome = engine
            .execute(Operation::Sum, &nums(&[5.0, 10.0]))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            OperationOutcome {
                numeros: vec![5.0, 10.0],
                resultado: 15.0,
                operacion: Operation::Sum,
            }
        );

        let records = store.find(&HistoryFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resultado, 15.0);
    }

    #[tokio::test]
    async fn failed_operations_leave_no_history() {
        let (engine, store) = engine_with_store();
        let err = engine
            .execute(Operation::Divide, &nums(&[10.0, 0.0]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Calc(core_types::CalcError::DivisionByZero)
        ));
        assert!(store.find(&HistoryFilter::default()).await.unwrap().is_empty());
    }
}
