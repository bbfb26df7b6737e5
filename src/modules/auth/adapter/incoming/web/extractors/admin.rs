use actix_web::{
    dev::Payload, http::header, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenError, TokenVerifier};
use crate::shared::api::ApiResponse;

/// Where unauthenticated visitors of admin routes are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// A caller holding a valid access token. Any signed-in account is a
/// full admin; there are no roles.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_required(code: &str, message: &str) -> ActixError {
    create_api_error(ApiResponse::login_required(LOGIN_PATH, code, message))
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Token verifier is not registered");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match bearer_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(login_required(
                    "MISSING_AUTH_HEADER",
                    "Sign in to access the admin area",
                )));
            }
        };

        match verifier.verify(&token) {
            Ok(claims) => ready(Ok(AdminUser {
                user_id: claims.sub,
                email: claims.email,
                access_token: token,
            })),
            Err(TokenError::TokenExpired) => ready(Err(login_required(
                "TOKEN_EXPIRED",
                "Session expired, sign in again",
            ))),
            Err(_) => ready(Err(login_required(
                "INVALID_TOKEN",
                "Invalid or expired token",
            ))),
        }
    }
}

/// Bearer token from the `Authorization` header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
