use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::about::domain::About;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::project::domain::{CategoryFilter, Project};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectsQuery {
    /// all, frontend, backend or fullstack
    #[param(example = "backend")]
    pub category: Option<String>,
}

/// Public projects, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/portfolio/projects",
    tag = "portfolio",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Projects, newest first", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 400, description = "Unknown category", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/projects")]
pub async fn get_public_projects_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.category.as_deref().map(str::parse::<CategoryFilter>) {
        None => CategoryFilter::All,
        Some(Ok(filter)) => filter,
        Some(Err(e)) => return ApiResponse::bad_request("INVALID_CATEGORY", &e.to_string()),
    };

    ApiResponse::success(data.portfolio.projects_in(filter).await)
}

/// Public experiences
#[utoipa::path(
    get,
    path = "/api/portfolio/experiences",
    tag = "portfolio",
    responses((status = 200, description = "Experiences, newest first", body = inline(SuccessResponse<Vec<Experience>>)))
)]
#[get("/api/portfolio/experiences")]
pub async fn get_public_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.experiences().await)
}

/// Public educations
#[utoipa::path(
    get,
    path = "/api/portfolio/educations",
    tag = "portfolio",
    responses((status = 200, description = "Educations, newest first", body = inline(SuccessResponse<Vec<Education>>)))
)]
#[get("/api/portfolio/educations")]
pub async fn get_public_educations_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.educations().await)
}

/// Public about section; null until the admin saves it
#[utoipa::path(
    get,
    path = "/api/portfolio/about",
    tag = "portfolio",
    responses((status = 200, description = "About data or null", body = inline(SuccessResponse<Option<About>>)))
)]
#[get("/api/portfolio/about")]
pub async fn get_public_about_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.about().await)
}
