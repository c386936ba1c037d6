use thiserror::Error;

/// Domain errors produced by the validation and arithmetic pipeline.
///
/// The `Display` strings are the messages the HTTP layer puts on the wire,
/// so they stay in the contract language.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// One or more elements of `numeros` are not numeric. Carries one
    /// message per offending element, naming its path and raw value.
    #[error("La lista debe contener solo números")]
    TypeMismatch { errors: Vec<String> },

    /// At least one element is strictly negative. Carries exactly the
    /// negative elements, in their original order.
    #[error("No se permiten números negativos")]
    NegativeNumbers(Vec<f64>),

    /// A division had a zero in any position after the first.
    #[error("No se puede dividir por cero")]
    DivisionByZero,

    /// The input sequence was empty.
    #[error("Se requiere al menos un número")]
    EmptyInput,

    /// The requested operation kind is not one of the four supported ones.
    #[error("Operacion no soportada")]
    UnsupportedOperation(String),
}
