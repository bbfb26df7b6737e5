use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::{
    catalog_error_response, field_errors_response,
};
use crate::modules::experience::domain::{Experience, ExperienceForm};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use uuid::Uuid;

/// Update an experience
#[utoipa::path(
    put,
    path = "/api/admin/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = ExperienceForm,
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "No such experience", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    form: web::Json<ExperienceForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match form.into_inner().into_fields() {
        Ok(f) => f,
        Err(errors) => return field_errors_response(&errors),
    };

    match data.experiences.update(path.into_inner(), fields).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => catalog_error_response(&e, "Experience"),
    }
}
