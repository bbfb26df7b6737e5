use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::normalize::split_lines;
use crate::shared::validation::FieldErrors;

use super::entities::EducationFields;

/// Education as typed in the admin form; `courses` is one per line.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationForm {
    #[schema(example = "MSc Computer Science")]
    pub degree: String,
    pub institution: String,
    pub location: String,
    #[schema(example = "2018 - 2020")]
    pub period: String,
    pub description: String,
    #[schema(example = "Distributed Systems\nCompilers")]
    pub courses: String,
}

impl EducationForm {
    pub fn into_fields(self) -> Result<EducationFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("degree", &self.degree);

        errors.into_result(EducationFields {
            degree: self.degree.trim().to_string(),
            institution: self.institution.trim().to_string(),
            location: self.location.trim().to_string(),
            period: self.period.trim().to_string(),
            description: self.description,
            courses: split_lines(&self.courses),
        })
    }
}
