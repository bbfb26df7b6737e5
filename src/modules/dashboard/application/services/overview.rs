use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::about::application::services::AboutService;
use crate::modules::content::application::services::{AdminCatalog, CatalogError};
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::project::domain::Project;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub projects: usize,
    pub experiences: usize,
    pub educations: usize,
    pub about_exists: bool,
}

/// Landing view of the back office: how much content each section holds.
#[derive(Clone)]
pub struct DashboardService {
    projects: AdminCatalog<Project>,
    experiences: AdminCatalog<Experience>,
    educations: AdminCatalog<Education>,
    about: AboutService,
}

impl DashboardService {
    pub fn new(
        projects: AdminCatalog<Project>,
        experiences: AdminCatalog<Experience>,
        educations: AdminCatalog<Education>,
        about: AboutService,
    ) -> Self {
        Self {
            projects,
            experiences,
            educations,
            about,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, CatalogError> {
        let (projects, experiences, educations, about) = futures::try_join!(
            self.projects.list(),
            self.experiences.list(),
            self.educations.list(),
            self.about.get(),
        )?;

        Ok(DashboardSummary {
            projects: projects.len(),
            experiences: experiences.len(),
            educations: educations.len(),
            about_exists: about.is_some(),
        })
    }
}
