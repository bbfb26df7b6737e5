use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::Session;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::auth_error_response;

/// Email and password from the admin login form
#[derive(Deserialize, ToSchema)]
pub struct CredentialsDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Admin sign-in
///
/// Exchanges email and password for an access token. An unconfirmed
/// email gets its own error code so the login form can explain it.
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = "auth",
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = inline(SuccessResponse<Session>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {"code": "INVALID_CREDENTIALS", "message": "Invalid email or password"}
            })
        ),
        (status = 403, description = "Email not confirmed", body = ErrorResponse),
        (status = 502, description = "Auth service unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/sign-in")]
pub async fn sign_in_handler(
    req: web::Json<CredentialsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(email = %dto.email, "Sign-in attempt");

    match data.auth.sign_in(dto.email, dto.password).await {
        Ok(session) => ApiResponse::success(session),
        Err(e) => auth_error_response(&e),
    }
}
