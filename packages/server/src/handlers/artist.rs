use axum::{Json, extract::State};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::artist::{
    AddArtistRequest, ArtistIdRequest, ArtistResponse, GetArtistRequest, UpdateArtistRequest,
    validate_add_artist, validate_update_artist,
};
use crate::models::shared::{ApiResponse, Empty, ParamsBody, required, required_text, success};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Artists",
    operation_id = "addArtist",
    summary = "Register an artist",
    description = "Stores a new artist and stamps its creation time. All profile fields except \
        the recommend words and the priority rating are required; empty strings count as missing. \
        A taken nickname is reported before any missing field. \
        Failure codes: 400 for a missing field or a taken nickname.",
    request_body = ParamsBody<AddArtistRequest>,
    responses(
        (status = 200, description = "Artist created", body = ApiResponse<ArtistResponse>),
    ),
)]
#[instrument(skip(state, payload), fields(nick_name = ?payload.nick_name))]
pub async fn add_artist(
    State(state): State<AppState>,
    Params(payload): Params<AddArtistRequest>,
) -> Result<Json<ApiResponse<ArtistResponse>>, AppError> {
    // A taken nickname is reported ahead of missing fields.
    if let Some(nick_name) = payload.nick_name.as_deref().filter(|n| !n.is_empty()) {
        services::artist::ensure_nick_name_free(&*state.store, nick_name).await?;
    }
    let new_artist = validate_add_artist(payload, Utc::now().timestamp())?;
    let artist = services::artist::add_artist(&*state.store, new_artist).await?;
    Ok(success(ArtistResponse::from(artist)))
}

#[utoipa::path(
    post,
    path = "/update",
    tag = "Artists",
    operation_id = "updateArtist",
    summary = "Edit an artist",
    description = "Overwrites every field that is present and non-null. `jobId` sets the job. \
        Failure codes: 400 for a missing `artistId` or a nickname owned by another artist, \
        404 for an unknown artist.",
    request_body = ParamsBody<UpdateArtistRequest>,
    responses(
        (status = 200, description = "Artist updated", body = ApiResponse<Empty>),
    ),
)]
#[instrument(skip(state, payload), fields(artist_id = ?payload.artist_id))]
pub async fn update_artist(
    State(state): State<AppState>,
    Params(payload): Params<UpdateArtistRequest>,
) -> Result<Json<ApiResponse<Empty>>, AppError> {
    let (artist_id, patch) = validate_update_artist(payload)?;
    services::artist::update_artist(&*state.store, artist_id, patch).await?;
    Ok(success(Empty {}))
}

#[utoipa::path(
    post,
    path = "/delete",
    tag = "Artists",
    operation_id = "deleteArtist",
    summary = "Delete an artist",
    description = "Deletes the artist with all of its demos and evaluations. \
        Failure codes: 400 for a missing `artistId`, 404 for an unknown artist.",
    request_body = ParamsBody<ArtistIdRequest>,
    responses(
        (status = 200, description = "Artist deleted", body = ApiResponse<Empty>),
    ),
)]
#[instrument(skip(state, payload), fields(artist_id = ?payload.artist_id))]
pub async fn delete_artist(
    State(state): State<AppState>,
    Params(payload): Params<ArtistIdRequest>,
) -> Result<Json<ApiResponse<Empty>>, AppError> {
    let artist_id = required(payload.artist_id, "artistId")?;
    services::artist::delete_artist(&*state.store, artist_id).await?;
    Ok(success(Empty {}))
}

#[utoipa::path(
    post,
    path = "/get",
    tag = "Artists",
    operation_id = "getArtist",
    summary = "Look up an artist by nickname",
    description = "Failure codes: 400 for a missing `nickName`, 404 for an unknown nickname.",
    request_body = ParamsBody<GetArtistRequest>,
    responses(
        (status = 200, description = "Artist found", body = ApiResponse<ArtistResponse>),
    ),
)]
#[instrument(skip(state, payload), fields(nick_name = ?payload.nick_name))]
pub async fn get_artist(
    State(state): State<AppState>,
    Params(payload): Params<GetArtistRequest>,
) -> Result<Json<ApiResponse<ArtistResponse>>, AppError> {
    let nick_name = required_text(payload.nick_name, "nickName")?;
    let artist = services::artist::get_artist(&*state.store, &nick_name).await?;
    Ok(success(ArtistResponse::from(artist)))
}
