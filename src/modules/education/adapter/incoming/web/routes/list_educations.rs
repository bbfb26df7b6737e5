use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::modules::education::domain::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// List educations (admin)
///
/// Unlike the public listing, a failed read is reported.
#[utoipa::path(
    get,
    path = "/api/admin/educations",
    tag = "educations",
    responses(
        (status = 200, description = "Educations, newest first", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/educations")]
pub async fn list_educations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.educations.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => catalog_error_response(&e, "Education"),
    }
}
