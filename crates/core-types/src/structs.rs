use crate::enums::Operation;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single element of an incoming `numeros` array.
///
/// Parsed at the HTTP boundary: JSON numbers become `Number`, everything
/// else is kept verbatim so validation can name it and error responses can
/// echo it back. Type errors are reported before any domain check runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Invalid(JsonValue),
}

impl RawNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Invalid(_) => None,
        }
    }
}

impl From<f64> for RawNumber {
    fn from(n: f64) -> Self {
        RawNumber::Number(n)
    }
}

/// Body of the four single-operation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleOperationBody {
    pub numeros: Vec<RawNumber>,
}

/// One item of a batch request. `operacion` stays a free string so unknown
/// kinds reach the batch runner instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOperation {
    pub operacion: String,
    pub numeros: Vec<RawNumber>,
}

/// Body of the batch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleOperationBody {
    pub operaciones: Vec<BatchOperation>,
}

/// A successfully computed operation, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub numeros: Vec<f64>,
    pub resultado: f64,
    pub operacion: Operation,
}

/// An error message on the wire: a single string for domain errors, a list
/// for type validation (one entry per offending element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// The payload of every error response, nested under `"detail"`, and the
/// shape of a failed batch item. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub error: ErrorMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeros: Option<Vec<RawNumber>>,
    #[serde(
        rename = "numerosNegativosEnviados",
        skip_serializing_if = "Option::is_none"
    )]
    pub numeros_negativos_enviados: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(rename = "ordenarPor", skip_serializing_if = "Option::is_none")]
    pub ordenar_por: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orden: Option<String>,
}

impl ErrorDetail {
    /// A detail carrying only a message.
    pub fn message(error: impl Into<String>) -> Self {
        ErrorDetail {
            error: ErrorMessage::One(error.into()),
            operacion: None,
            numeros: None,
            numeros_negativos_enviados: None,
            fecha: None,
            ordenar_por: None,
            orden: None,
        }
    }

    /// Builds the wire payload for a failed operation.
    ///
    /// Negative-number failures echo only the offending subset (as
    /// `numerosNegativosEnviados`); every other failure echoes the full
    /// input as it was received.
    pub fn from_calc(operacion: &str, numeros: &[RawNumber], err: &CalcError) -> Self {
        let mut detail = ErrorDetail::message(err.to_string());
        detail.operacion = Some(operacion.to_string());
        match err {
            CalcError::TypeMismatch { errors } => {
                detail.error = ErrorMessage::Many(errors.clone());
                detail.numeros = Some(numeros.to_vec());
            }
            CalcError::NegativeNumbers(negativos) => {
                detail.numeros_negativos_enviados = Some(negativos.clone());
            }
            CalcError::DivisionByZero
            | CalcError::EmptyInput
            | CalcError::UnsupportedOperation(_) => {
                detail.numeros = Some(numeros.to_vec());
            }
        }
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_number_accepts_ints_and_floats() {
        let body: SingleOperationBody = serde_json::from_value(json!({
            "numeros": [5, 2.5]
        }))
        .unwrap();
        assert_eq!(
            body.numeros,
            vec![RawNumber::Number(5.0), RawNumber::Number(2.5)]
        );
    }

    #[test]
    fn raw_number_keeps_invalid_values_verbatim() {
        let body: SingleOperationBody = serde_json::from_value(json!({
            "numeros": [10, "0d", null]
        }))
        .unwrap();
        assert_eq!(body.numeros[0].as_f64(), Some(10.0));
        assert_eq!(body.numeros[1], RawNumber::Invalid(json!("0d")));
        assert_eq!(body.numeros[2], RawNumber::Invalid(JsonValue::Null));
    }

    #[test]
    fn negative_detail_carries_only_the_subset() {
        let numeros = vec![RawNumber::Number(5.0), RawNumber::Number(-10.0)];
        let detail = ErrorDetail::from_calc(
            "suma",
            &numeros,
            &CalcError::NegativeNumbers(vec![-10.0]),
        );
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "No se permiten números negativos",
                "operacion": "suma",
                "numerosNegativosEnviados": [-10.0]
            })
        );
    }

    #[test]
    fn division_detail_echoes_the_full_input() {
        let numeros = vec![RawNumber::Number(10.0), RawNumber::Number(0.0)];
        let detail = ErrorDetail::from_calc("division", &numeros, &CalcError::DivisionByZero);
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["numeros"], json!([10.0, 0.0]));
        assert!(value.get("numerosNegativosEnviados").is_none());
    }
}
