use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::{
    catalog_error_response, field_errors_response,
};
use crate::modules::education::domain::{Education, EducationForm};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Create an education
#[utoipa::path(
    post,
    path = "/api/admin/educations",
    tag = "educations",
    request_body = EducationForm,
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 502, description = "Backend rejected the write", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/educations")]
pub async fn create_education_handler(
    _admin: AdminUser,
    form: web::Json<EducationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let fields = match form.into_inner().into_fields() {
        Ok(f) => f,
        Err(errors) => return field_errors_response(&errors),
    };

    match data.educations.create(fields).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => catalog_error_response(&e, "Education"),
    }
}
