use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::{AuthUser, SignUpOutcome};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use super::{auth_error_response, CredentialsDto};

#[derive(Serialize, ToSchema)]
pub struct SignUpResponse {
    /// True when a confirmation email must be followed before signing in
    pub confirmation_required: bool,
    /// Text for the login form
    pub message: String,
    pub user: AuthUser,
}

impl From<SignUpOutcome> for SignUpResponse {
    fn from(outcome: SignUpOutcome) -> Self {
        let confirmation_required = matches!(outcome, SignUpOutcome::PendingConfirmation(_));
        let message = outcome.message().to_string();
        let user = match outcome {
            SignUpOutcome::PendingConfirmation(u) | SignUpOutcome::Active(u) => u,
        };
        Self {
            confirmation_required,
            message,
            user,
        }
    }
}

/// Admin sign-up
///
/// Both a pending and an active account are successful outcomes.
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = "auth",
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created", body = SignUpResponse),
        (status = 400, description = "Rejected by the auth service", body = ErrorResponse),
        (status = 502, description = "Auth service unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/sign-up")]
pub async fn sign_up_handler(
    req: web::Json<CredentialsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    info!(email = %dto.email, "Sign-up attempt");

    match data.auth.sign_up(dto.email, dto.password).await {
        Ok(outcome) => ApiResponse::created(SignUpResponse::from(outcome)),
        Err(e) => auth_error_response(&e),
    }
}
