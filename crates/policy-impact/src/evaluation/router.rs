use axum::extract::rejection::JsonRejection;
use axum::{routing::post, Json, Router};
use tracing::info;

use super::request::{EvaluationRequest, InputError};
use super::{evaluate, EvaluationResult};
use crate::error::AppError;

/// Router exposing the policy evaluation endpoint.
pub fn evaluation_router() -> Router {
    Router::new().route("/api/v1/evaluate", post(evaluate_handler))
}

pub(crate) async fn evaluate_handler(
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| InputError::Malformed(rejection.body_text()))?;
    let input = payload.into_input()?;
    let result = evaluate(&input);

    info!(
        request_id = %result.metadata.request_id,
        policy = %input.policy_choice,
        company = %input.company_name,
        "evaluated policy choice"
    );

    Ok(Json(result))
}
