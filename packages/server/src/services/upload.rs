use common::storage::{BoxReader, FileStore};
use tracing::info;

use crate::error::AppError;
use crate::utils::filename::{extension_of, is_name_token};

/// Lower-case extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp4", "jpg", "jpeg", "png"];
/// Purpose label used when the client sends none.
pub const DEFAULT_PURPOSE: &str = "files";
/// Consecutive millisecond stamps tried before giving up on a free name.
pub const MAX_NAME_ATTEMPTS: usize = 16;
/// Path prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Lower-cased extension of `filename` if it is an accepted type.
pub fn accepted_extension(filename: &str) -> Result<String, AppError> {
    extension_of(filename)
        .map(str::to_ascii_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| AppError::Validation("Unsupported file type".into()))
}

/// Purpose label for the stored name. Blank means the default.
pub fn resolve_purpose(purpose: Option<String>) -> Result<String, AppError> {
    let purpose = match purpose {
        Some(p) if !p.trim().is_empty() => p.trim().to_string(),
        _ => return Ok(DEFAULT_PURPOSE.to_string()),
    };
    if !is_name_token(&purpose) {
        return Err(AppError::Validation(
            "name may only contain letters, digits, '-' and '_'".into(),
        ));
    }
    Ok(purpose)
}

/// `{millis}_{purpose}.{ext}` for `millis` and the following stamps.
pub fn candidate_names(millis: i64, purpose: &str, ext: &str) -> Vec<String> {
    (0..MAX_NAME_ATTEMPTS as i64)
        .map(|offset| format!("{}_{purpose}.{ext}", millis + offset))
        .collect()
}

pub fn public_url(name: &str) -> String {
    format!("{PUBLIC_PREFIX}/{name}")
}

/// Store `reader` under a fresh timestamped name and return its public URL.
pub async fn save_upload(
    files: &dyn FileStore,
    reader: BoxReader,
    purpose: &str,
    ext: &str,
    millis: i64,
) -> Result<String, AppError> {
    let candidates = candidate_names(millis, purpose, ext);
    let stored = files.put_stream(&candidates, reader).await?;
    info!(name = %stored.name, size = stored.size, "File stored");
    Ok(public_url(&stored.name))
}
