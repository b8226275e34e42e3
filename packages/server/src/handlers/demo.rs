use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::demo::{AddDemoRequest, validate_add_demo};
use crate::models::shared::{ApiResponse, Empty, ParamsBody, success};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Demos",
    operation_id = "addDemo",
    summary = "Attach a demo to an artist",
    description = "Registers an already uploaded file as a demo of the given type. \
        Failure codes: 400 for a missing field, 404 for an unknown artist.",
    request_body = ParamsBody<AddDemoRequest>,
    responses(
        (status = 200, description = "Demo registered", body = ApiResponse<Empty>),
    ),
)]
#[instrument(skip(state, payload), fields(artist_id = ?payload.artist_id))]
pub async fn add_demo(
    State(state): State<AppState>,
    Params(payload): Params<AddDemoRequest>,
) -> Result<Json<ApiResponse<Empty>>, AppError> {
    let demo = validate_add_demo(payload)?;
    services::demo::add_demo(&*state.store, demo).await?;
    Ok(success(Empty {}))
}
