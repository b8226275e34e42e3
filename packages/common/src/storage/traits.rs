use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::error::StorageError;

/// Type alias for a boxed async reader.
pub type BoxReader = Box<dyn AsyncRead + Unpin + Send>;

/// A file that landed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub name: String,
    pub size: u64,
}

/// Flat, name-addressed file storage.
///
/// Writes never replace an existing file: callers pass an ordered list of
/// candidate names and the store keeps the first one that is still free.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store data from an async reader under the first free candidate name.
    async fn put_stream(
        &self,
        candidates: &[String],
        reader: BoxReader,
    ) -> Result<StoredFile, StorageError>;

    /// Retrieve a file as a streaming async reader.
    async fn get_stream(&self, name: &str) -> Result<BoxReader, StorageError>;

    /// Get the size of a file in bytes.
    async fn size(&self, name: &str) -> Result<u64, StorageError>;
}
