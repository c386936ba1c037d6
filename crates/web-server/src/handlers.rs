use crate::{error::ApiError, AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use core_types::{MultipleOperationBody, Operation, OperationOutcome, SingleOperationBody};
use engine::{BatchItemOutcome, BatchStatus, HistoryEntry, HistoryParams};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response envelope of the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub historial: Vec<HistoryEntry>,
}

async fn run_single(
    state: &AppState,
    operacion: Operation,
    body: SingleOperationBody,
) -> Result<Json<OperationOutcome>, ApiError> {
    let outcome = state
        .engine
        .execute(operacion, &body.numeros)
        .await
        .map_err(|err| ApiError::with_request(operacion, &body.numeros, err))?;
    Ok(Json(outcome))
}

/// # POST /calculadora/sum
pub async fn post_sum(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SingleOperationBody>,
) -> Result<Json<OperationOutcome>, ApiError> {
    run_single(&state, Operation::Sum, body).await
}

/// # POST /calculadora/resta
pub async fn post_subtract(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SingleOperationBody>,
) -> Result<Json<OperationOutcome>, ApiError> {
    run_single(&state, Operation::Subtract, body).await
}

/// # POST /calculadora/mult
pub async fn post_multiply(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SingleOperationBody>,
) -> Result<Json<OperationOutcome>, ApiError> {
    run_single(&state, Operation::Multiply, body).await
}

/// # POST /calculadora/div
pub async fn post_divide(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SingleOperationBody>,
) -> Result<Json<OperationOutcome>, ApiError> {
    run_single(&state, Operation::Divide, body).await
}

/// # POST /calculadora/operacionMultiple
///
/// Answers 200 when every item succeeded, 206 when at least one failed;
/// either way the body lists one outcome per input item, in order.
pub async fn post_multiple_operations(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MultipleOperationBody>,
) -> Result<(StatusCode, Json<Vec<BatchItemOutcome>>), ApiError> {
    let (outcomes, status) = state.engine.run_batch(&body.operaciones).await?;
    let code = match status {
        BatchStatus::AllSucceeded => StatusCode::OK,
        BatchStatus::Partial => StatusCode::PARTIAL_CONTENT,
    };
    Ok((code, Json(outcomes)))
}

/// # GET /calculadora/historial
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let historial = state
        .engine
        .query_history(&params, state.display_offset)
        .await?;
    Ok(Json(HistoryResponse { historial }))
}
