use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::about::domain::{About, AboutForm};
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save the about data
///
/// Creates the row on first save, updates it afterwards.
#[utoipa::path(
    put,
    path = "/api/admin/about",
    tag = "about",
    request_body = AboutForm,
    responses(
        (status = 200, description = "Saved", body = inline(SuccessResponse<About>)),
        (status = 400, description = "Invalid body, e.g. a negative count", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/about")]
pub async fn save_about_handler(
    _admin: AdminUser,
    form: web::Json<AboutForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.save(form.into_inner().into()).await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => catalog_error_response(&e, "About"),
    }
}
