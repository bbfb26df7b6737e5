// src/modules/content/application/services/admin_catalog.rs

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::modules::content::application::domain::{Record, Stamped};
use crate::modules::content::application::ports::outgoing::{RecordStore, StoreError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("remote read failed: {0}")]
    RemoteRead(String),

    #[error("remote write failed: {0}")]
    RemoteWrite(String),

    #[error("record not found")]
    NotFound,
}

impl CatalogError {
    fn read(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CatalogError::NotFound,
            other => CatalogError::RemoteRead(other.to_string()),
        }
    }

    fn write(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CatalogError::NotFound,
            other => CatalogError::RemoteWrite(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Admin-side CRUD over one content table.
///
/// Reads surface failures (the admin must see them), writes restamp
/// `updated_at` with the current time.
pub struct AdminCatalog<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> Clone for AdminCatalog<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Record> AdminCatalog<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<R>, CatalogError> {
        self.store.select_all().await.map_err(|e| {
            error!(table = R::TABLE, error = %e, "Failed to list records");
            CatalogError::RemoteRead(e.to_string())
        })
    }

    pub async fn find(&self, id: Uuid) -> Result<R, CatalogError> {
        self.store.select_by_id(id).await.map_err(CatalogError::read)
    }

    pub async fn create(&self, fields: R::Fields) -> Result<R, CatalogError> {
        let created = self
            .store
            .insert(Stamped::now(fields))
            .await
            .map_err(|e| match e {
                // A fresh insert has nothing to miss.
                StoreError::NotFound => {
                    CatalogError::RemoteWrite("unexpected not found on insert".to_string())
                }
                other => CatalogError::write(other),
            })?;

        info!(table = R::TABLE, id = %created.id(), "Record created");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, fields: R::Fields) -> Result<R, CatalogError> {
        let updated = self
            .store
            .update(id, Stamped::now(fields))
            .await
            .map_err(CatalogError::write)?;

        info!(table = R::TABLE, id = %id, "Record updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        self.store.delete(id).await.map_err(CatalogError::write)?;

        info!(table = R::TABLE, id = %id, "Record deleted");
        Ok(())
    }
}
