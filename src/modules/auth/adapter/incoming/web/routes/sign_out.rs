use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::info;

use super::auth_error_response;

/// Admin sign-out
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = "auth",
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Not signed in"),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/auth/sign-out")]
pub async fn sign_out_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.sign_out(&admin.access_token).await {
        Ok(()) => {
            info!(user_id = %admin.user_id, "Admin signed out");
            ApiResponse::no_content()
        }
        Err(e) => auth_error_response(&e),
    }
}
