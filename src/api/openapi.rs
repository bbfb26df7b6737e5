use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

// Domain
use crate::auth::application::domain::{AuthState, AuthUser, Session};
use crate::modules::about::domain::{About, AboutForm};
use crate::modules::contact::domain::ContactForm;
use crate::modules::dashboard::application::services::DashboardSummary;
use crate::modules::education::domain::{Education, EducationForm};
use crate::modules::experience::domain::{Experience, ExperienceForm};
use crate::modules::portfolio::application::services::PortfolioPage;
use crate::modules::preferences::domain::{Language, Preferences, Theme};
use crate::modules::project::domain::{Project, ProjectCategory, ProjectForm};

// Web DTOs
use crate::auth::adapter::incoming::web::routes::{CredentialsDto, SignUpResponse};
use crate::modules::contact::adapter::incoming::web::routes::ContactSent;
use crate::modules::media::adapter::incoming::web::form::{ImageFileSchema, ImageUploadSchema};
use crate::modules::media::adapter::incoming::web::routes::UploadedImage;
use crate::modules::preferences::adapter::incoming::web::routes::PreferencesUpdate;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio pages, contact form and content back office"
    ),
    paths(
        // Public
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_experiences_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_educations_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_public_about_handler,
        crate::modules::contact::adapter::incoming::web::routes::send_contact_handler,
        crate::modules::preferences::adapter::incoming::web::routes::get_preferences_handler,
        crate::modules::preferences::adapter::incoming::web::routes::update_preferences_handler,
        crate::modules::preferences::adapter::incoming::web::routes::toggle_language_handler,
        crate::modules::preferences::adapter::incoming::web::routes::toggle_theme_handler,

        // Auth
        crate::auth::adapter::incoming::web::routes::sign_in_handler,
        crate::auth::adapter::incoming::web::routes::sign_up_handler,
        crate::auth::adapter::incoming::web::routes::sign_out_handler,
        crate::auth::adapter::incoming::web::routes::session_handler,

        // Admin
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,
        crate::modules::project::adapter::incoming::web::routes::replace_project_image_handler,
        crate::modules::media::adapter::incoming::web::routes::upload_image_handler,
        crate::modules::experience::adapter::incoming::web::routes::list_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,
        crate::modules::education::adapter::incoming::web::routes::list_educations_handler,
        crate::modules::education::adapter::incoming::web::routes::create_education_handler,
        crate::modules::education::adapter::incoming::web::routes::update_education_handler,
        crate::modules::education::adapter::incoming::web::routes::delete_education_handler,
        crate::modules::about::adapter::incoming::web::routes::get_about_handler,
        crate::modules::about::adapter::incoming::web::routes::save_about_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Records
            Project,
            ProjectCategory,
            Experience,
            Education,
            About,
            PortfolioPage,
            DashboardSummary,

            // Forms
            ProjectForm,
            ExperienceForm,
            EducationForm,
            AboutForm,
            ContactForm,
            ContactSent,
            ImageUploadSchema,
            ImageFileSchema,
            UploadedImage,

            // Auth
            CredentialsDto,
            SignUpResponse,
            Session,
            AuthUser,
            AuthState,

            // Preferences
            Language,
            Theme,
            Preferences,
            PreferencesUpdate
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio sections"),
        (name = "contact", description = "Contact form"),
        (name = "preferences", description = "Language and theme"),
        (name = "auth", description = "Sign-in gate of the back office"),
        (name = "dashboard", description = "Back office overview"),
        (name = "projects", description = "Project management"),
        (name = "experiences", description = "Experience management"),
        (name = "educations", description = "Education management"),
        (name = "about", description = "About section management"),
        (name = "media", description = "Image uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/sign-in"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
