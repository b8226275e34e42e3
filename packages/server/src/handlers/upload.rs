use std::path::Path as FsPath;

use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use common::storage::{BoxReader, StorageError};
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::shared::{ApiResponse, success};
use crate::models::upload::UploadResponse;
use crate::services::upload::{accepted_extension, resolve_purpose, save_upload};
use crate::state::AppState;
use crate::utils::filename::validate_flat_filename;

/// Multipart framing on top of the file itself.
const FORM_OVERHEAD: u64 = 64 * 1024;

pub fn upload_body_limit(max_upload_size: u64) -> DefaultBodyLimit {
    let limit = max_upload_size.saturating_add(FORM_OVERHEAD);
    DefaultBodyLimit::max(usize::try_from(limit).unwrap_or(usize::MAX))
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Files",
    operation_id = "uploadFile",
    summary = "Upload a media file",
    description = "Multipart form with a required `file` field and an optional `name` field \
        used as the purpose label of the stored name (default `files`). Accepted types: \
        mp4, jpg, jpeg, png. Existing files are never replaced. \
        Failure codes: 400 for a missing file, an unsupported type, a bad name or an oversized file.",
    request_body(content_type = "multipart/form-data", description = "File with optional purpose label"),
    responses(
        (status = 200, description = "File stored", body = ApiResponse<UploadResponse>),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, AppError> {
    let staging = std::env::temp_dir().join(format!("agency-upload-{}", Uuid::new_v4()));

    let result = receive_and_store(&state, &mut multipart, &staging).await;

    // Best effort.
    let _ = tokio::fs::remove_file(&staging).await;

    let url = result?;
    Ok(success(UploadResponse { url }))
}

/// The purpose label may arrive after the file, so the file is staged on disk
/// until the whole form has been read.
async fn receive_and_store(
    state: &AppState,
    multipart: &mut Multipart,
    staging: &FsPath,
) -> Result<String, AppError> {
    let max_size = state.config.storage.max_upload_size;
    let mut extension: Option<String> = None;
    let mut purpose: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let ext = accepted_extension(&filename)?;
                stage_field(field, staging, max_size).await?;
                extension = Some(ext);
            }
            Some("name") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read name: {e}")))?;
                purpose = Some(text);
            }
            _ => {}
        }
    }

    let ext = extension.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;
    let purpose = resolve_purpose(purpose)?;

    let file = tokio::fs::File::open(staging)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to reopen temp file: {e}")))?;
    let reader: BoxReader = Box::new(file);

    save_upload(
        &*state.files,
        reader,
        &purpose,
        &ext,
        Utc::now().timestamp_millis(),
    )
    .await
}

async fn stage_field(
    mut field: axum::extract::multipart::Field<'_>,
    staging: &FsPath,
    max_size: u64,
) -> Result<u64, AppError> {
    let mut temp_file = tokio::fs::File::create(staging)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create temp file: {e}")))?;

    let mut total_size: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?
    {
        total_size += chunk.len() as u64;
        if total_size > max_size {
            return Err(AppError::Validation(format!(
                "File exceeds maximum size of {max_size} bytes"
            )));
        }
        temp_file
            .write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(format!("Temp file write failed: {e}")))?;
    }

    temp_file
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("Temp file flush failed: {e}")))?;
    Ok(total_size)
}

#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    tag = "Files",
    operation_id = "serveUpload",
    summary = "Download a stored file",
    description = "Streams the raw bytes with a content type guessed from the extension. \
        Unknown or invalid names get HTTP 404.",
    params(("filename" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 404, description = "No such file"),
    ),
)]
#[instrument(skip(state))]
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let name = match validate_flat_filename(&filename) {
        Ok(name) => name,
        Err(e) => {
            debug!(reason = e.message(), "Rejected upload name");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    match open_upload(&state, name).await {
        Ok(response) => response,
        Err(StorageError::NotFound(_) | StorageError::InvalidName(_)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to serve upload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn open_upload(state: &AppState, name: &str) -> Result<Response, StorageError> {
    let size = state.files.size(name).await?;
    let reader = state.files.get_stream(name).await?;
    let content_type = mime_guess::from_path(name).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_LENGTH, size.to_string()),
        ],
        Body::from_stream(ReaderStream::new(reader)),
    )
        .into_response())
}
