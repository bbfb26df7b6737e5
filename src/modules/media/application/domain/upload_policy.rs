// src/modules/media/application/domain/upload_policy.rs

/// An image received from the admin, not yet stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("File is empty")]
    Empty,

    #[error("Expected an image, got '{0}'")]
    NotAnImage(String),

    #[error("Image is {size} bytes, limit is {max} bytes")]
    TooLarge { size: usize, max: usize },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB

    pub fn check(&self, upload: &ImageUpload) -> Result<(), UploadRejection> {
        if upload.bytes.is_empty() {
            return Err(UploadRejection::Empty);
        }
        if !upload.content_type.trim().to_lowercase().starts_with("image/") {
            return Err(UploadRejection::NotAnImage(upload.content_type.clone()));
        }
        if upload.bytes.len() > self.max_file_size_bytes {
            return Err(UploadRejection::TooLarge {
                size: upload.bytes.len(),
                max: self.max_file_size_bytes,
            });
        }
        Ok(())
    }
}
