use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::casting::{AuditionResponse, CastingRequest, CastingResponse, validate_casting};
use crate::models::shared::{ApiResponse, ParamsBody, success};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/select",
    tag = "Casting",
    operation_id = "selectCasting",
    summary = "Select demos for a casting",
    description = "Demos of type `tagId` whose artist matches every optional bound. \
        Failure codes: 400 for a missing `tagId`.",
    request_body = ParamsBody<CastingRequest>,
    responses(
        (status = 200, description = "Matching auditions", body = ApiResponse<CastingResponse>),
    ),
)]
#[instrument(skip(state, payload), fields(tag_id = ?payload.tag_id))]
pub async fn select_casting(
    State(state): State<AppState>,
    Params(payload): Params<CastingRequest>,
) -> Result<Json<ApiResponse<CastingResponse>>, AppError> {
    let filter = validate_casting(payload)?;
    let rows = services::casting::select_casting(&*state.store, &filter).await?;
    Ok(success(CastingResponse {
        auditions: rows.into_iter().map(AuditionResponse::from).collect(),
    }))
}
