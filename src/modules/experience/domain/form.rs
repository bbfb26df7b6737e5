use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::normalize::split_lines;
use crate::shared::validation::FieldErrors;

use super::entities::ExperienceFields;

/// Experience as typed in the admin form; `achievements` is one per line.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    #[schema(example = "Backend Engineer")]
    pub title: String,
    pub company: String,
    pub location: String,
    #[schema(example = "2021 - 2023")]
    pub period: String,
    pub description: String,
    #[schema(example = "Led the billing rewrite\nMentored two juniors")]
    pub achievements: String,
}

impl ExperienceForm {
    pub fn into_fields(self) -> Result<ExperienceFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title);

        errors.into_result(ExperienceFields {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            period: self.period.trim().to_string(),
            description: self.description,
            achievements: split_lines(&self.achievements),
        })
    }
}
