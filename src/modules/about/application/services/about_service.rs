// src/modules/about/application/services/about_service.rs

use tracing::{info, warn};

use crate::modules::about::domain::{About, AboutFields};
use crate::modules::content::application::services::{AdminCatalog, CatalogError};

/// Read-before-write access to the about singleton.
///
/// `save` is not atomic: two first-time saves racing each other can both
/// see an empty table and insert two rows. Only one admin edits this, and
/// no uniqueness constraint exists to lean on.
#[derive(Clone)]
pub struct AboutService {
    catalog: AdminCatalog<About>,
}

impl AboutService {
    pub fn new(catalog: AdminCatalog<About>) -> Self {
        Self { catalog }
    }

    /// The most recently saved row, if any.
    pub async fn get(&self) -> Result<Option<About>, CatalogError> {
        Ok(self.catalog.list().await?.into_iter().next())
    }

    pub async fn save(&self, fields: AboutFields) -> Result<About, CatalogError> {
        let existing = match self.catalog.list().await {
            Ok(rows) => rows.into_iter().next(),
            Err(e) => {
                warn!(error = %e, "Could not read about row, inserting a new one");
                None
            }
        };

        match existing {
            Some(current) => {
                info!(id = %current.id, "Updating about row");
                self.catalog.update(current.id, fields).await
            }
            None => {
                info!("No about row yet, creating it");
                self.catalog.create(fields).await
            }
        }
    }
}
