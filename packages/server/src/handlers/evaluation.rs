use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::evaluation::{
    AddEvaluationRequest, EvaluationResponse, ListEvaluationsRequest, validate_add_evaluation,
};
use crate::models::shared::{ApiResponse, Empty, ParamsBody, required, success};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Evaluations",
    operation_id = "addEvaluation",
    summary = "Record a director's evaluation",
    description = "Failure codes: 400 for a missing field, an `evaluate` text shorter than \
        30 characters or a score outside 1..=10; 404 for an unknown artist.",
    request_body = ParamsBody<AddEvaluationRequest>,
    responses(
        (status = 200, description = "Evaluation recorded", body = ApiResponse<Empty>),
    ),
)]
#[instrument(skip(state, payload), fields(artist_id = ?payload.artist_id))]
pub async fn add_evaluation(
    State(state): State<AppState>,
    Params(payload): Params<AddEvaluationRequest>,
) -> Result<Json<ApiResponse<Empty>>, AppError> {
    let evaluation = validate_add_evaluation(payload, Utc::now())?;
    services::evaluation::add_evaluation(&*state.store, evaluation).await?;
    Ok(success(Empty {}))
}

#[utoipa::path(
    post,
    path = "/list",
    tag = "Evaluations",
    operation_id = "listEvaluations",
    summary = "List an artist's evaluations",
    description = "Latest business time first. Failure codes: 400 for a missing `artistId`.",
    request_body = ParamsBody<ListEvaluationsRequest>,
    responses(
        (status = 200, description = "Evaluations", body = ApiResponse<Vec<EvaluationResponse>>),
    ),
)]
#[instrument(skip(state, payload), fields(artist_id = ?payload.artist_id))]
pub async fn list_evaluations(
    State(state): State<AppState>,
    Params(payload): Params<ListEvaluationsRequest>,
) -> Result<Json<ApiResponse<Vec<EvaluationResponse>>>, AppError> {
    let artist_id = required(payload.artist_id, "artistId")?;
    let evaluations = services::evaluation::list_evaluations(&*state.store, artist_id).await?;
    Ok(success(
        evaluations
            .into_iter()
            .map(EvaluationResponse::from)
            .collect(),
    ))
}
