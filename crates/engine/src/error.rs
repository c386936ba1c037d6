use crate::history::HistoryQueryError;
use core_types::CalcError;
use database::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A domain failure from validation or arithmetic.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// An invalid history query parameter.
    #[error(transparent)]
    Query(#[from] HistoryQueryError),

    /// The storage collaborator failed.
    #[error("History storage error: {0}")]
    Storage(#[from] DbError),
}
