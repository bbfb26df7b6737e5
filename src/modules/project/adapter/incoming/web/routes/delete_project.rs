use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
///
/// The cover image is removed first on a best-effort basis; a storage
/// failure does not block the row deletion.
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 502, description = "Backend rejected the delete", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => catalog_error_response(&e, "Project"),
    }
}
