use actix_web::HttpResponse;
use tracing::error;

use crate::modules::content::application::services::CatalogError;
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldErrors;

/// Maps a catalog failure onto the envelope. `entity` names the record in
/// the not-found message ("Project", "Experience", ...).
pub fn catalog_error_response(err: &CatalogError, entity: &str) -> HttpResponse {
    match err {
        CatalogError::NotFound => ApiResponse::not_found(
            &format!("{}_NOT_FOUND", entity.to_uppercase()),
            &format!("{} not found", entity),
        ),
        CatalogError::RemoteRead(msg) => {
            error!(entity, error = %msg, "Remote read failed");
            ApiResponse::bad_gateway("REMOTE_READ_ERROR", "Failed to load data from the backend")
        }
        CatalogError::RemoteWrite(msg) => {
            error!(entity, error = %msg, "Remote write failed");
            ApiResponse::bad_gateway("REMOTE_WRITE_ERROR", "The backend rejected the change")
        }
    }
}

pub fn field_errors_response(errors: &FieldErrors) -> HttpResponse {
    ApiResponse::validation_failed("Some fields are invalid", errors.to_details())
}
