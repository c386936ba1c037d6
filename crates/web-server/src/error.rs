use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::{CalcError, ErrorDetail, Operation, RawNumber};
use engine::{EngineError, HistoryQueryError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A domain failure, together with the request context the response
    /// echoes back.
    #[error("{source}")]
    Operation {
        operacion: Operation,
        numeros: Vec<RawNumber>,
        #[source]
        source: CalcError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ApiError {
    /// Attaches the request body to a failed single-operation call.
    pub fn with_request(operacion: Operation, numeros: &[RawNumber], err: EngineError) -> Self {
        match err {
            EngineError::Calc(source) => ApiError::Operation {
                operacion,
                numeros: numeros.to_vec(),
                source,
            },
            other => ApiError::Engine(other),
        }
    }
}

fn status_for_calc(err: &CalcError) -> StatusCode {
    match err {
        CalcError::TypeMismatch { .. } | CalcError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        CalcError::NegativeNumbers(_) | CalcError::UnsupportedOperation(_) => {
            StatusCode::BAD_REQUEST
        }
        CalcError::DivisionByZero => StatusCode::FORBIDDEN,
    }
}

/// Converts our custom `ApiError` into an HTTP response. Every error body is
/// the detail payload nested under `"detail"`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Operation {
                operacion,
                numeros,
                source,
            } => (
                status_for_calc(&source),
                ErrorDetail::from_calc(operacion.as_str(), &numeros, &source),
            ),
            ApiError::Engine(EngineError::Query(err)) => {
                let status = match err {
                    HistoryQueryError::InvalidDate(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_REQUEST,
                };
                let mut detail = ErrorDetail::message(err.to_string());
                match err {
                    HistoryQueryError::UnsupportedOperation(value) => {
                        detail.operacion = Some(value);
                    }
                    HistoryQueryError::InvalidDate(value) => detail.fecha = Some(value),
                    HistoryQueryError::UnsupportedSortField(value) => {
                        detail.ordenar_por = Some(value);
                    }
                    HistoryQueryError::UnsupportedSortDirection(value) => {
                        detail.orden = Some(value);
                    }
                }
                (status, detail)
            }
            ApiError::Engine(EngineError::Storage(err)) => {
                tracing::error!(error = ?err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::message("An internal database error occurred"),
                )
            }
            // Domain errors reach this arm only without request context;
            // the status mapping still holds.
            ApiError::Engine(EngineError::Calc(err)) => {
                (status_for_calc(&err), ErrorDetail::message(err.to_string()))
            }
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}
