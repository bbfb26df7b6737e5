// src/modules/portfolio/application/services/portfolio_service.rs

use std::sync::Arc;

use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::about::domain::About;
use crate::modules::content::application::domain::Record;
use crate::modules::content::application::ports::outgoing::RecordStore;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::project::domain::{CategoryFilter, Project};

/// Everything the public one-page site renders, section by section.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioPage {
    pub about: Option<About>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
}

/// Read-only access for the public pages.
///
/// A failed read is logged and rendered as an empty section; visitors
/// never see a backend error.
#[derive(Clone)]
pub struct PortfolioService {
    projects: Arc<dyn RecordStore<Project>>,
    experiences: Arc<dyn RecordStore<Experience>>,
    educations: Arc<dyn RecordStore<Education>>,
    about: Arc<dyn RecordStore<About>>,
}

async fn list_or_empty<R: Record>(store: &dyn RecordStore<R>) -> Vec<R> {
    match store.select_all().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(table = R::TABLE, error = %e, "Public read failed, showing empty section");
            Vec::new()
        }
    }
}

impl PortfolioService {
    pub fn new(
        projects: Arc<dyn RecordStore<Project>>,
        experiences: Arc<dyn RecordStore<Experience>>,
        educations: Arc<dyn RecordStore<Education>>,
        about: Arc<dyn RecordStore<About>>,
    ) -> Self {
        Self {
            projects,
            experiences,
            educations,
            about,
        }
    }

    pub async fn projects(&self) -> Vec<Project> {
        list_or_empty(self.projects.as_ref()).await
    }

    pub async fn projects_in(&self, filter: CategoryFilter) -> Vec<Project> {
        self.projects()
            .await
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    pub async fn experiences(&self) -> Vec<Experience> {
        list_or_empty(self.experiences.as_ref()).await
    }

    pub async fn educations(&self) -> Vec<Education> {
        list_or_empty(self.educations.as_ref()).await
    }

    /// The most recently saved about row.
    pub async fn about(&self) -> Option<About> {
        list_or_empty(self.about.as_ref()).await.into_iter().next()
    }

    pub async fn page(&self) -> PortfolioPage {
        let (about, projects, experiences, educations) = futures::join!(
            self.about(),
            self.projects(),
            self.experiences(),
            self.educations()
        );

        PortfolioPage {
            about,
            projects,
            experiences,
            educations,
        }
    }
}
