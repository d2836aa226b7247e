#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejected {
    #[error("File is too large (max {max_bytes} bytes)")]
    TooLarge { max_bytes: u64 },

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/svg+xml",
    ];

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    pub fn check(&self, content_type: &str, size_bytes: u64) -> Result<(), UploadRejected> {
        if !self
            .allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
        {
            let shown = if content_type.is_empty() {
                "unknown"
            } else {
                content_type
            };
            return Err(UploadRejected::UnsupportedType(shown.to_string()));
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(UploadRejected::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}
