use thiserror::Error;

/// Errors that can occur during file storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested file was not found.
    #[error("file not found: {0}")]
    NotFound(String),
    /// The name is not a flat, visible file name.
    #[error("invalid file name: {0}")]
    InvalidName(String),
    /// Every candidate name is already taken.
    #[error("no free file name among {0} candidates")]
    NameExhausted(usize),
    /// The file exceeds the configured size limit.
    #[error("file exceeds size limit ({actual} > {limit} bytes)")]
    SizeLimitExceeded { actual: u64, limit: u64 },
    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
}
