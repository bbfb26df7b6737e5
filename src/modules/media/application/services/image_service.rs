// src/modules/media/application/services/image_service.rs

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::media::application::domain::{
    extension_for, key_from_public_url, ImageUpload, ObjectKey, UploadPolicy, UploadRejection,
};
use crate::modules::media::application::ports::outgoing::{ObjectStorage, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("upload failed: {0}")]
    Storage(#[from] StorageError),
}

/// Uploads project images and cleans up replaced ones.
#[derive(Clone)]
pub struct ImageService {
    storage: Arc<dyn ObjectStorage>,
    policy: UploadPolicy,
}

impl fmt::Debug for ImageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageService")
            .field("storage", &"<dyn ObjectStorage>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl ImageService {
    pub fn new(storage: Arc<dyn ObjectStorage>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    /// Stores the image under a fresh key and returns its public URL.
    pub async fn upload(
        &self,
        upload: ImageUpload,
        owner: Option<Uuid>,
    ) -> Result<String, ImageError> {
        self.policy.check(&upload)?;

        let extension = extension_for(upload.file_name.as_deref(), &upload.content_type);
        let key = ObjectKey::generate(owner, &extension);
        let size = upload.bytes.len();

        self.storage
            .upload(key.as_str(), upload.bytes, &upload.content_type)
            .await?;

        info!(key = %key, size, "Image uploaded");
        Ok(self.storage.public_url(key.as_str()))
    }

    /// Best-effort removal of the object behind a stored URL.
    ///
    /// Never fails: a dangling object is preferable to blocking the caller.
    pub async fn delete(&self, image_url: &str) {
        let Some(key) = key_from_public_url(image_url) else {
            return;
        };

        match self.storage.remove(&[key.clone()]).await {
            Ok(()) => info!(key = %key, "Image removed"),
            Err(e) => warn!(key = %key, error = %e, "Failed to remove image, continuing"),
        }
    }
}
