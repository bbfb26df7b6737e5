use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Uploads never overwrite; the key is already taken.
    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Rejected by storage: {0}")]
    Rejected(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port over the image bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` under `key`. Fails with `AlreadyExists` instead of overwriting.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    async fn remove(&self, keys: &[String]) -> Result<(), StorageError>;

    /// Public URL for `key`. Pure, no I/O.
    fn public_url(&self, key: &str) -> String;
}
