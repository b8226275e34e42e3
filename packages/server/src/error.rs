use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::storage::StorageError;
use serde::Serialize;

use crate::models::shared::Empty;
use crate::repository::RepoError;

/// Envelope returned by every endpoint on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Failure code. One of: `400` (missing parameter, duplicate entity,
    /// validation), `401` (bad credentials), `404` (not found), `500`
    /// (internal error).
    #[schema(example = 404)]
    pub code: i32,
    /// Human-readable error description.
    #[schema(example = "Artist not found")]
    pub msg: String,
    /// Always an empty object on failure.
    pub data: Empty,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// A required request field is absent. Carries the field name.
    MissingParameter(String),
    /// A uniqueness rule would be broken (nickname, user name).
    Duplicate(String),
    Validation(String),
    NotFound(String),
    AuthFailed,
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> i32 {
        match self {
            AppError::MissingParameter(_) | AppError::Duplicate(_) | AppError::Validation(_) => 400,
            AppError::AuthFailed => 401,
            AppError::NotFound(_) => 404,
            AppError::Internal(_) => 500,
        }
    }

    fn into_body(self) -> ErrorBody {
        let code = self.code();
        let msg = match self {
            AppError::MissingParameter(field) => format!("Missing required field: {field}"),
            AppError::Duplicate(msg) | AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::AuthFailed => "Invalid username or password".into(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An unexpected error occurred".into()
            }
        };
        ErrorBody {
            code,
            msg,
            data: Empty {},
        }
    }
}

/// Failures travel inside the envelope; the HTTP status stays 200 so clients
/// only have to inspect `code`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.into_body())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::UniqueViolation(what) => {
                tracing::debug!("unique constraint caught on write: {what}");
                AppError::Duplicate(format!("{what} already exists"))
            }
            RepoError::Backend(detail) => AppError::Internal(detail),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => AppError::NotFound("File not found".into()),
            StorageError::InvalidName(_) => AppError::Validation("Invalid file name".into()),
            StorageError::SizeLimitExceeded { limit, .. } => {
                AppError::Validation(format!("File exceeds maximum size of {limit} bytes"))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
