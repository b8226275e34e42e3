use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::shared::{ApiResponse, ParamsBody, success};
use crate::models::stats::{NoviceResponse, PartnershipResponse, StatsRequest};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/latest",
    tag = "Stats",
    operation_id = "latestArtists",
    summary = "List novice artists of a job",
    description = "Artists created within the last 60 days with fewer than 3 evaluations. \
        Priority-rated artists come first by rating, the rest oldest first.",
    request_body = ParamsBody<StatsRequest>,
    responses(
        (status = 200, description = "Novice artists", body = ApiResponse<Vec<NoviceResponse>>),
    ),
)]
#[instrument(skip(state, payload), fields(job = ?payload.job))]
pub async fn latest_artists(
    State(state): State<AppState>,
    Params(payload): Params<StatsRequest>,
) -> Result<Json<ApiResponse<Vec<NoviceResponse>>>, AppError> {
    let now = Utc::now().timestamp();
    let novices = services::stats::latest_artists(&*state.store, payload.job, now).await?;
    Ok(success(novices.into_iter().map(NoviceResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/partnership",
    tag = "Stats",
    operation_id = "partnershipRank",
    summary = "Rank veteran artists of a job",
    description = "Artists past 60 days or with at least 3 evaluations, scored on their \
        latest three evaluations. Priority-rated artists come first by rating, the rest by score.",
    request_body = ParamsBody<StatsRequest>,
    responses(
        (status = 200, description = "Veteran ranking", body = ApiResponse<Vec<PartnershipResponse>>),
    ),
)]
#[instrument(skip(state, payload), fields(job = ?payload.job))]
pub async fn partnership_rank(
    State(state): State<AppState>,
    Params(payload): Params<StatsRequest>,
) -> Result<Json<ApiResponse<Vec<PartnershipResponse>>>, AppError> {
    let now = Utc::now().timestamp();
    let veterans = services::stats::partnership_rank(&*state.store, payload.job, now).await?;
    Ok(success(
        veterans.into_iter().map(PartnershipResponse::from).collect(),
    ))
}
