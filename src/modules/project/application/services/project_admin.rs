// src/modules/project/application/services/project_admin.rs

use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::content::application::services::{AdminCatalog, CatalogError};
use crate::modules::media::application::domain::ImageUpload;
use crate::modules::media::application::services::{ImageError, ImageService};
use crate::modules::project::domain::{Project, ProjectFields};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Project CRUD plus the stored cover image that goes with each row.
#[derive(Clone)]
pub struct ProjectAdminService {
    catalog: AdminCatalog<Project>,
    images: ImageService,
}

impl ProjectAdminService {
    pub fn new(catalog: AdminCatalog<Project>, images: ImageService) -> Self {
        Self { catalog, images }
    }

    pub fn catalog(&self) -> &AdminCatalog<Project> {
        &self.catalog
    }

    pub async fn list(&self) -> Result<Vec<Project>, CatalogError> {
        self.catalog.list().await
    }

    pub async fn create(&self, fields: ProjectFields) -> Result<Project, CatalogError> {
        self.catalog.create(fields).await
    }

    /// Saves the row, then drops the previous cover object when the row no
    /// longer points at it.
    pub async fn update(&self, id: Uuid, fields: ProjectFields) -> Result<Project, CatalogError> {
        let previous = self.catalog.find(id).await?;
        let updated = self.catalog.update(id, fields).await?;

        if let Some(old) = previous.image_url.as_deref() {
            if updated.image_url.as_deref() != Some(old) {
                self.images.delete(old).await;
            }
        }

        Ok(updated)
    }

    /// Removes the stored image (best effort) and then the row.
    pub async fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        let project = self.catalog.find(id).await?;

        if let Some(url) = project.image_url.as_deref() {
            self.images.delete(url).await;
        }

        self.catalog.delete(id).await
    }

    /// Uploads a new cover under the project's id, points the row at it,
    /// then drops the previous object.
    pub async fn replace_image(
        &self,
        id: Uuid,
        upload: ImageUpload,
    ) -> Result<Project, ProjectError> {
        let project = self.catalog.find(id).await?;
        let new_url = self.images.upload(upload, Some(id)).await?;

        let mut fields = project.fields();
        fields.image_url = Some(new_url.clone());

        let updated = match self.catalog.update(id, fields).await {
            Ok(updated) => updated,
            Err(e) => {
                warn!(project_id = %id, error = %e, "Image uploaded but row update failed");
                self.images.delete(&new_url).await;
                return Err(e.into());
            }
        };

        if let Some(old) = project.image_url.as_deref() {
            self.images.delete(old).await;
        }

        info!(project_id = %id, "Project image replaced");
        Ok(updated)
    }
}
