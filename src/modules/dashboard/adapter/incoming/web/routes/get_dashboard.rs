use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::adapter::incoming::web::catalog_error_response;
use crate::modules::dashboard::application::services::DashboardSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Back office overview
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = "dashboard",
    responses(
        (status = 200, description = "Section counts", body = inline(SuccessResponse<DashboardSummary>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Backend read failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin")]
pub async fn get_dashboard_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    tracing::debug!(user = %admin.user_id, "Dashboard requested");
    match data.dashboard.summary().await {
        Ok(summary) => ApiResponse::success(summary),
        Err(e) => catalog_error_response(&e, "Dashboard"),
    }
}
