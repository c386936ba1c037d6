pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Operation, SortDirection, SortField};
pub use error::CalcError;
pub use structs::{
    BatchOperation, ErrorDetail, ErrorMessage, MultipleOperationBody, OperationOutcome, RawNumber,
    SingleOperationBody,
};
