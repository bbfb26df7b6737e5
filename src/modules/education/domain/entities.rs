use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::Record;

/// A row of the `educations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub courses: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationFields {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub courses: Vec<String>,
}

impl Record for Education {
    const TABLE: &'static str = "educations";
    type Fields = EducationFields;

    fn id(&self) -> Uuid {
        self.id
    }
}
