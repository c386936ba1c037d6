use crate::error::EngineError;
use crate::CalcEngine;
use core_types::{BatchOperation, CalcError, ErrorDetail, Operation, OperationOutcome};
use serde::Serialize;

/// One entry of a batch response: the success payload or the same error
/// detail a single-operation endpoint would have produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchItemOutcome {
    Success(OperationOutcome),
    Error(ErrorDetail),
}

impl BatchItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchItemOutcome::Success(_))
    }
}

/// Whether every batch item succeeded. Drives HTTP 200 vs 206.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    AllSucceeded,
    Partial,
}

impl CalcEngine {
    /// Applies each request in input order, isolating failures per item.
    ///
    /// Domain failures become error outcomes and processing continues; the
    /// outcome list always matches the input one-to-one. Only a storage
    /// failure aborts the whole batch. One history record is written per
    /// successful item, in processing order.
    pub async fn run_batch(
        &self,
        operaciones: &[BatchOperation],
    ) -> Result<(Vec<BatchItemOutcome>, BatchStatus), EngineError> {
        let mut outcomes = Vec::with_capacity(operaciones.len());

        for item in operaciones {
            let outcome = match item.operacion.parse::<Operation>() {
                Err(()) => BatchItemOutcome::Error(ErrorDetail::from_calc(
                    &item.operacion,
                    &item.numeros,
                    &CalcError::UnsupportedOperation(item.operacion.clone()),
                )),
                Ok(operacion) => match self.execute(operacion, &item.numeros).await {
                    Ok(outcome) => BatchItemOutcome::Success(outcome),
                    Err(EngineError::Calc(err)) => BatchItemOutcome::Error(
                        ErrorDetail::from_calc(&item.operacion, &item.numeros, &err),
                    ),
                    Err(err) => return Err(err),
                },
            };
            outcomes.push(outcome);
        }

        let status = if outcomes.iter().all(BatchItemOutcome::is_success) {
            BatchStatus::AllSucceeded
        } else {
            BatchStatus::Partial
        };
        Ok((outcomes, status))
    }
}
