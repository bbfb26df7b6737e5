use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::Record;

/// A row of the `experiences` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Free text, e.g. "2021 - Present"
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Record for Experience {
    const TABLE: &'static str = "experiences";
    type Fields = ExperienceFields;

    fn id(&self) -> Uuid {
        self.id
    }
}
