use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Frontend,
    Backend,
    Fullstack,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}', expected all, frontend, backend or fullstack")]
pub struct UnknownCategory(pub String);

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(ProjectCategory::Frontend),
            "backend" => Ok(ProjectCategory::Backend),
            "fullstack" => Ok(ProjectCategory::Fullstack),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Category selector of the public projects section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") || s.trim().is_empty() {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// A row of the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Public URL of the cover image in the storage bucket
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub demo_url: Option<String>,
    pub code_url: Option<String>,
    #[serde(default)]
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// The writable part of the row, e.g. to change only the image.
    pub fn fields(&self) -> ProjectFields {
        ProjectFields {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            tags: self.tags.clone(),
            demo_url: self.demo_url.clone(),
            code_url: self.code_url.clone(),
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub demo_url: Option<String>,
    pub code_url: Option<String>,
    pub category: ProjectCategory,
}

impl Record for Project {
    const TABLE: &'static str = "projects";
    type Fields = ProjectFields;

    fn id(&self) -> Uuid {
        self.id
    }
}
