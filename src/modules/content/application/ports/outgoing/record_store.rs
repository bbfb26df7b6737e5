// src/modules/content/application/ports/outgoing/record_store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::application::domain::{Record, Stamped};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No row matches the given id.
    #[error("Record not found")]
    NotFound,

    /// The backend refused the payload (constraint, policy, unknown column).
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    /// Transport failure or server-side error.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (one remote table)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// All rows, newest first by `R::ORDER_BY`.
    async fn select_all(&self) -> Result<Vec<R>, StoreError>;

    async fn select_by_id(&self, id: Uuid) -> Result<R, StoreError>;

    /// Inserts one row and returns it with its backend-assigned id.
    async fn insert(&self, row: Stamped<R::Fields>) -> Result<R, StoreError>;

    /// Fails with `NotFound` when no row has this id.
    async fn update(&self, id: Uuid, row: Stamped<R::Fields>) -> Result<R, StoreError>;

    /// Fails with `NotFound` when no row has this id.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
