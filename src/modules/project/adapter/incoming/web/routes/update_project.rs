use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::{
    catalog_error_response, field_errors_response,
};
use crate::modules::project::domain::{Project, ProjectForm};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectForm,
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    form: web::Json<ProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match form.into_inner().into_fields() {
        Ok(f) => f,
        Err(errors) => return field_errors_response(&errors),
    };

    match data.projects.update(path.into_inner(), fields).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => catalog_error_response(&e, "Project"),
    }
}
