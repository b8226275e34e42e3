use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Uniform success envelope: `{code: 0, msg: "success", data}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    /// Always `0` on success.
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "success")]
    pub msg: String,
    pub data: T,
}

/// Wrap `data` in a success envelope.
pub fn success<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code: 0,
        msg: "success".into(),
        data,
    })
}

/// Serializes as `{}`; the payload of operations that return nothing.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
pub struct Empty {}

/// Request wrapper: every JSON endpoint takes its fields under `params`.
/// A missing `params` object reads as all fields absent.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ParamsBody<T> {
    #[serde(default)]
    pub params: T,
}

/// Unwrap a field that must be present (and non-null).
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::MissingParameter(field.to_string()))
}

/// Unwrap a text field that must be present and non-empty.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::MissingParameter(field.to_string())),
    }
}
