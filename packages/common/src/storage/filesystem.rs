use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};

use super::error::StorageError;
use super::traits::{BoxReader, FileStore, StoredFile};

/// Filesystem-backed flat file store.
///
/// Files live directly under `base_path`. Incoming data is staged in
/// `{base_path}/.tmp` and then hard-linked to its final name, so a name that
/// already exists is detected atomically and never overwritten.
pub struct FilesystemFileStore {
    base_path: PathBuf,
    max_size: u64,
}

impl FilesystemFileStore {
    /// Create a new filesystem file store.
    pub async fn new(base_path: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path).await?;
        fs::create_dir_all(base_path.join(".tmp")).await?;
        Ok(Self {
            base_path,
            max_size,
        })
    }

    /// Resolve a stored file name to its path, rejecting anything that is not
    /// a plain visible file directly under the base directory.
    fn file_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        let flat = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\', '\0']);
        if !flat {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }

    async fn stage(&self, mut reader: BoxReader) -> Result<(PathBuf, u64), StorageError> {
        let temp_path = self.temp_path();
        let mut temp_file = fs::File::create(&temp_path).await?;
        let mut total_bytes: u64 = 0;
        let mut buf = vec![0u8; 64 * 1024];

        loop {
            let n = match reader.read(&mut buf).await {
                Ok(n) => n,
                Err(e) => {
                    drop(temp_file);
                    let _ = fs::remove_file(&temp_path).await;
                    return Err(e.into());
                }
            };
            if n == 0 {
                break;
            }

            total_bytes += n as u64;
            if total_bytes > self.max_size {
                drop(temp_file);
                let _ = fs::remove_file(&temp_path).await;
                return Err(StorageError::SizeLimitExceeded {
                    actual: total_bytes,
                    limit: self.max_size,
                });
            }

            temp_file.write_all(&buf[..n]).await?;
        }

        temp_file.flush().await?;
        drop(temp_file);

        Ok((temp_path, total_bytes))
    }
}

#[async_trait]
impl FileStore for FilesystemFileStore {
    async fn put_stream(
        &self,
        candidates: &[String],
        reader: BoxReader,
    ) -> Result<StoredFile, StorageError> {
        let targets = candidates
            .iter()
            .map(|name| self.file_path(name).map(|path| (name, path)))
            .collect::<Result<Vec<_>, _>>()?;

        let (temp_path, size) = self.stage(reader).await?;

        for (name, path) in targets {
            match fs::hard_link(&temp_path, &path).await {
                Ok(()) => {
                    let _ = fs::remove_file(&temp_path).await;
                    return Ok(StoredFile {
                        name: name.clone(),
                        size,
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(name = %name, "file name taken, trying next candidate");
                }
                Err(e) => {
                    let _ = fs::remove_file(&temp_path).await;
                    return Err(e.into());
                }
            }
        }

        let _ = fs::remove_file(&temp_path).await;
        Err(StorageError::NameExhausted(candidates.len()))
    }

    async fn get_stream(&self, name: &str) -> Result<BoxReader, StorageError> {
        let path = self.file_path(name)?;
        match fs::File::open(&path).await {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn size(&self, name: &str) -> Result<u64, StorageError> {
        let path = self.file_path(name)?;
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
