use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use uuid::Uuid;

/// Delete an experience
#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such experience", body = ErrorResponse),
        (status = 502, description = "Backend rejected the delete", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experiences.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => catalog_error_response(&e, "Experience"),
    }
}
