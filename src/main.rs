pub mod api;
pub mod modules;
pub use modules::auth;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenVerifier};
use crate::auth::adapter::outgoing::SupabaseAuthProvider;
use crate::auth::application::ports::outgoing::TokenVerifier;
use crate::auth::application::services::AuthService;
use crate::health::BackendProbe;
use crate::modules::about::application::services::AboutService;
use crate::modules::about::domain::About;
use crate::modules::contact::adapter::outgoing::ContactConfig;
use crate::modules::contact::application::services::ContactService;
use crate::modules::content::adapter::outgoing::SupabaseRecordStore;
use crate::modules::content::application::domain::Record;
use crate::modules::content::application::ports::outgoing::RecordStore;
use crate::modules::content::application::services::AdminCatalog;
use crate::modules::dashboard::application::services::DashboardService;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::media::adapter::outgoing::SupabaseObjectStorage;
use crate::modules::media::application::domain::UploadPolicy;
use crate::modules::media::application::services::ImageService;
use crate::modules::portfolio::application::services::PortfolioService;
use crate::modules::project::application::services::ProjectAdminService;
use crate::modules::project::domain::Project;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_env_files, ServerConfig};
use crate::shared::supabase::{SupabaseClient, SupabaseConfig};

use actix_multipart::form::MultipartFormConfig;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

/// Multipart bodies are buffered in memory; leave room above the
/// upload policy limit so oversized files reach it and get a clear 413.
const MULTIPART_MEMORY_LIMIT: usize = UploadPolicy::DEFAULT_MAX_FILE_SIZE_BYTES + 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioService,
    pub projects: ProjectAdminService,
    pub experiences: AdminCatalog<Experience>,
    pub educations: AdminCatalog<Education>,
    pub about: AboutService,
    pub images: ImageService,
    pub dashboard: DashboardService,
    pub auth: AuthService,
    pub contact: ContactService,
}

fn reader<R: Record>(client: &SupabaseClient) -> Arc<dyn RecordStore<R>> {
    Arc::new(SupabaseRecordStore::<R>::reader(client.clone()))
}

fn writer<R: Record>(client: &SupabaseClient) -> AdminCatalog<R> {
    AdminCatalog::new(Arc::new(SupabaseRecordStore::<R>::writer(client.clone())))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let server = ServerConfig::from_env()?;
    let supabase = SupabaseConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let contact_config = ContactConfig::from_env()?;

    let client = SupabaseClient::new(supabase)?;

    // Public pages read with the anon key, the back office writes with the service key
    let portfolio = PortfolioService::new(
        reader::<Project>(&client),
        reader::<Experience>(&client),
        reader::<Education>(&client),
        reader::<About>(&client),
    );

    let images = ImageService::new(
        Arc::new(SupabaseObjectStorage::new(client.clone())),
        UploadPolicy::default(),
    );
    let projects = ProjectAdminService::new(writer::<Project>(&client), images.clone());
    let experiences = writer::<Experience>(&client);
    let educations = writer::<Education>(&client);
    let about = AboutService::new(writer::<About>(&client));
    let dashboard = DashboardService::new(
        projects.catalog().clone(),
        experiences.clone(),
        educations.clone(),
        about.clone(),
    );

    let auth = AuthService::new(Arc::new(SupabaseAuthProvider::new(client.clone())));
    let sender = contact_config.build_sender(client.raw().clone())?;
    let contact = ContactService::new(sender, contact_config.recipient_name.clone());

    let state = AppState {
        portfolio,
        projects,
        experiences,
        educations,
        about,
        images,
        dashboard,
        auth,
        contact,
    };

    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(&jwt_config));
    let probe: Arc<dyn BackendProbe> = Arc::new(client);

    let bind_address = server.bind_address();
    info!(address = %bind_address, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier)))
            .app_data(web::Data::new(Arc::clone(&probe)))
            .app_data(custom_json_config())
            .app_data(
                MultipartFormConfig::default()
                    .memory_limit(MULTIPART_MEMORY_LIMIT)
                    .total_limit(MULTIPART_MEMORY_LIMIT),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        about::adapter::incoming::web::routes as about,
        contact::adapter::incoming::web::routes as contact,
        dashboard::adapter::incoming::web::routes as dashboard,
        education::adapter::incoming::web::routes as education,
        experience::adapter::incoming::web::routes as experience,
        media::adapter::incoming::web::routes as media,
        portfolio::adapter::incoming::web::routes as portfolio,
        preferences::adapter::incoming::web::routes as preferences,
        project::adapter::incoming::web::routes as project,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Public
    cfg.service(portfolio::get_portfolio_handler);
    cfg.service(portfolio::get_public_projects_handler);
    cfg.service(portfolio::get_public_experiences_handler);
    cfg.service(portfolio::get_public_educations_handler);
    cfg.service(portfolio::get_public_about_handler);
    cfg.service(contact::send_contact_handler);
    cfg.service(preferences::get_preferences_handler);
    cfg.service(preferences::update_preferences_handler);
    cfg.service(preferences::toggle_language_handler);
    cfg.service(preferences::toggle_theme_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_in_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_up_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::sign_out_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session_handler);
    // Admin
    cfg.service(dashboard::get_dashboard_handler);
    cfg.service(project::list_projects_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::replace_project_image_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    cfg.service(media::upload_image_handler);
    cfg.service(experience::list_experiences_handler);
    cfg.service(experience::create_experience_handler);
    cfg.service(experience::update_experience_handler);
    cfg.service(experience::delete_experience_handler);
    cfg.service(education::list_educations_handler);
    cfg.service(education::create_education_handler);
    cfg.service(education::update_education_handler);
    cfg.service(education::delete_education_handler);
    cfg.service(about::get_about_handler);
    cfg.service(about::save_about_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
