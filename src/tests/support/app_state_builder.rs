use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::domain::AuthUser;
use crate::auth::application::ports::outgoing::AuthProvider;
use crate::auth::application::services::AuthService;
use crate::modules::about::application::services::AboutService;
use crate::modules::about::domain::About;
use crate::modules::contact::application::ports::outgoing::EmailSender;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::application::ports::outgoing::RecordStore;
use crate::modules::content::application::services::AdminCatalog;
use crate::modules::dashboard::application::services::DashboardService;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::media::application::domain::UploadPolicy;
use crate::modules::media::application::ports::outgoing::ObjectStorage;
use crate::modules::media::application::services::ImageService;
use crate::modules::portfolio::application::services::PortfolioService;
use crate::modules::project::application::services::ProjectAdminService;
use crate::modules::project::domain::Project;
use crate::tests::support::in_memory::{InMemoryObjectStorage, InMemoryRecordStore};
use crate::tests::support::stubs::{RecordingEmailSender, StubAuthProvider};
use crate::AppState;

/// Everything in memory. Public and admin services share one store per
/// table, so what the back office writes the public pages read.
pub struct TestAppStateBuilder {
    projects: Arc<dyn RecordStore<Project>>,
    experiences: Arc<dyn RecordStore<Experience>>,
    educations: Arc<dyn RecordStore<Education>>,
    about: Arc<dyn RecordStore<About>>,
    storage: Arc<dyn ObjectStorage>,
    auth_provider: Arc<dyn AuthProvider>,
    email_sender: Arc<dyn EmailSender>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            projects: Arc::new(InMemoryRecordStore::<Project>::new()),
            experiences: Arc::new(InMemoryRecordStore::<Experience>::new()),
            educations: Arc::new(InMemoryRecordStore::<Education>::new()),
            about: Arc::new(InMemoryRecordStore::<About>::new()),
            storage: Arc::new(InMemoryObjectStorage::new()),
            auth_provider: Arc::new(StubAuthProvider::signed_in(AuthUser {
                id: Uuid::new_v4(),
                email: Some("admin@site.dev".to_string()),
                email_confirmed: true,
            })),
            email_sender: Arc::new(RecordingEmailSender::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_project_store(mut self, store: impl RecordStore<Project> + 'static) -> Self {
        self.projects = Arc::new(store);
        self
    }

    pub fn with_experience_store(mut self, store: impl RecordStore<Experience> + 'static) -> Self {
        self.experiences = Arc::new(store);
        self
    }

    pub fn with_education_store(mut self, store: impl RecordStore<Education> + 'static) -> Self {
        self.educations = Arc::new(store);
        self
    }

    pub fn with_about_store(mut self, store: impl RecordStore<About> + 'static) -> Self {
        self.about = Arc::new(store);
        self
    }

    pub fn with_object_storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Arc::new(provider);
        self
    }

    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = sender;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let images = ImageService::new(self.storage, UploadPolicy::default());
        let experiences = AdminCatalog::new(Arc::clone(&self.experiences));
        let educations = AdminCatalog::new(Arc::clone(&self.educations));
        let about = AboutService::new(AdminCatalog::new(Arc::clone(&self.about)));
        let projects =
            ProjectAdminService::new(AdminCatalog::new(Arc::clone(&self.projects)), images.clone());
        let dashboard = DashboardService::new(
            projects.catalog().clone(),
            experiences.clone(),
            educations.clone(),
            about.clone(),
        );

        web::Data::new(AppState {
            portfolio: PortfolioService::new(
                self.projects,
                self.experiences,
                self.educations,
                self.about,
            ),
            projects,
            experiences,
            educations,
            about,
            images,
            dashboard,
            auth: AuthService::new(self.auth_provider),
            contact: ContactService::new(self.email_sender, "Portfolio owner"),
        })
    }
}
