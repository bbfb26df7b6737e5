use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::services::PortfolioPage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public page
///
/// About, projects, experience and education sections in one response.
/// Sections whose read failed come back empty.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Page content", body = inline(SuccessResponse<PortfolioPage>)),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.page().await)
}
