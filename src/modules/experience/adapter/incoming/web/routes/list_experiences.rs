use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::modules::experience::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};

/// List experiences (admin)
///
/// Unlike the public listing, a failed read is reported.
#[utoipa::path(
    get,
    path = "/api/admin/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "Experiences, newest first", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/experiences")]
pub async fn list_experiences_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experiences.list().await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => catalog_error_response(&e, "Experience"),
    }
}
