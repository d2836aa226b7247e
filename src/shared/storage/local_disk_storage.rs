use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use super::file_storage::{FileStorage, StorageError, UploadedFile};

/// Writes uploads into a directory that the HTTP server exposes under `public_prefix`.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStorage {
    pub const PUBLIC_PREFIX: &'static str = "/uploads";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            public_prefix: Self::PUBLIC_PREFIX.to_string(),
        }
    }

    fn unique_name(file: &UploadedFile) -> String {
        format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            file.extension().to_ascii_lowercase()
        )
    }
}

#[async_trait]
impl FileStorage for LocalDiskStorage {
    async fn store(&self, file: UploadedFile) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            error!(error = %e, dir = %self.root.display(), "Failed to create upload directory");
            StorageError::Io(e.to_string())
        })?;

        let name = Self::unique_name(&file);
        let path = self.root.join(&name);

        tokio::fs::write(&path, &file.bytes).await.map_err(|e| {
            error!(error = %e, path = %path.display(), "Failed to write uploaded file");
            StorageError::Io(e.to_string())
        })?;

        info!(file = %name, size = file.bytes.len(), "Stored uploaded file");

        Ok(format!("{}/{}", self.public_prefix, name))
    }
}
