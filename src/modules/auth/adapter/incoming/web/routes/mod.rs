mod session;
mod sign_in;
mod sign_out;
mod sign_up;

pub use session::*;
pub use sign_in::*;
pub use sign_out::*;
pub use sign_up::*;

use crate::auth::application::domain::AuthError;
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;

/// Shared mapping of auth failures onto the response envelope.
pub(crate) fn auth_error_response(err: &AuthError) -> HttpResponse {
    match err {
        AuthError::InvalidInput(msg) => ApiResponse::bad_request("VALIDATION_ERROR", msg),
        AuthError::InvalidCredentials => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &err.to_string())
        }
        AuthError::EmailNotConfirmed => {
            ApiResponse::forbidden("EMAIL_NOT_CONFIRMED", &err.to_string())
        }
        AuthError::Rejected(msg) => ApiResponse::bad_request("AUTH_REJECTED", msg),
        AuthError::Unavailable(msg) => {
            tracing::error!(error = %msg, "Auth service unavailable");
            ApiResponse::bad_gateway("AUTH_UNAVAILABLE", "Authentication service unavailable")
        }
    }
}
