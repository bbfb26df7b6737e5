use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::normalize::{blank_to_none, split_commas};
use crate::shared::validation::FieldErrors;

use super::entities::{ProjectCategory, ProjectFields};

/// Project as typed in the admin form; `tags` is comma-separated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    #[schema(example = "Portfolio site")]
    pub title: String,
    pub description: String,
    /// Public URL returned by the image upload route, or blank
    pub image_url: Option<String>,
    #[schema(example = "React, Tailwind, Supabase")]
    pub tags: String,
    pub demo_url: Option<String>,
    pub code_url: Option<String>,
    pub category: ProjectCategory,
}

impl ProjectForm {
    pub fn into_fields(self) -> Result<ProjectFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title);

        errors.into_result(ProjectFields {
            title: self.title.trim().to_string(),
            description: self.description,
            image_url: blank_to_none(self.image_url),
            tags: split_commas(&self.tags),
            demo_url: blank_to_none(self.demo_url),
            code_url: blank_to_none(self.code_url),
            category: self.category,
        })
    }
}
