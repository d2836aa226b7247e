use async_trait::async_trait;

/// An uploaded file held in memory until it is handed to a [`FileStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Extension of the client-side file name, falling back to the MIME type.
    pub fn extension(&self) -> &str {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        from_name.unwrap_or(match self.content_type.as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/svg+xml" => "svg",
            _ => "bin",
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write file: {0}")]
    Io(String),
}

/// Opaque blob store. Returns the public reference under which the file is served.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn store(&self, file: UploadedFile) -> Result<String, StorageError>;
}
