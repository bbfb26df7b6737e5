use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::services::ContactError;
use crate::modules::contact::domain::ContactForm;
use crate::modules::content::adapter::incoming::web::field_errors_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactSent {
    pub message: String,
}

/// Send a message to the site owner
///
/// Every field is checked before anything is sent; all problems come back
/// together under `error.details`. One delivery attempt, no retry.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message delivered", body = inline(SuccessResponse<ContactSent>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 502, description = "Email provider failed", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn send_contact_handler(
    form: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit(form.into_inner()).await {
        Ok(()) => ApiResponse::success(ContactSent {
            message: "Message sent successfully".to_string(),
        }),
        Err(ContactError::Invalid(errors)) => field_errors_response(&errors),
        Err(ContactError::Delivery(_)) => ApiResponse::bad_gateway(
            "CONTACT_SEND_FAILED",
            "Failed to send message. Please try again later.",
        ),
    }
}
