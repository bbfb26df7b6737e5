use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::bearer_token;
use crate::auth::application::domain::AuthState;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpRequest, Responder};

/// Current auth state
///
/// Never fails: a missing, expired or unknown token reads as anonymous.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Auth state", body = inline(SuccessResponse<AuthState>)),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = bearer_token(&req);
    ApiResponse::success(data.auth.session(token.as_deref()).await)
}
