use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::about::domain::About;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Load the about data for editing
///
/// `data` is null until the first save.
#[utoipa::path(
    get,
    path = "/api/admin/about",
    tag = "about",
    responses(
        (status = 200, description = "Current about row or null", body = inline(SuccessResponse<Option<About>>)),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/about")]
pub async fn get_about_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.about.get().await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => catalog_error_response(&e, "About"),
    }
}
