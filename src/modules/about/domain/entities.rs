use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::content::application::domain::Record;

/// The single row of the `about` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct About {
    pub id: Uuid,
    #[serde(default)]
    pub description_fr: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub projects_count: u32,
    #[serde(default)]
    pub clients_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutFields {
    pub description_fr: String,
    pub description_en: String,
    pub experience_years: u32,
    pub projects_count: u32,
    pub clients_count: u32,
}

impl Record for About {
    const TABLE: &'static str = "about";
    // no created_at column; the latest save wins
    const ORDER_BY: &'static str = "updated_at";
    type Fields = AboutFields;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// The about form. Counts are unsigned, so negative input is refused
/// when the body is parsed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AboutForm {
    pub description_fr: String,
    pub description_en: String,
    #[schema(example = 5)]
    pub experience_years: u32,
    #[schema(example = 30)]
    pub projects_count: u32,
    #[schema(example = 12)]
    pub clients_count: u32,
}

impl From<AboutForm> for AboutFields {
    fn from(form: AboutForm) -> Self {
        AboutFields {
            description_fr: form.description_fr,
            description_en: form.description_en,
            experience_years: form.experience_years,
            projects_count: form.projects_count,
            clients_count: form.clients_count,
        }
    }
}
