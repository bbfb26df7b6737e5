use actix_web::{post, HttpRequest, HttpResponse};

use crate::api::schemas::SuccessResponse;
use crate::modules::preferences::adapter::incoming::web::cookies::{
    preferences_response, read_preferences,
};
use crate::modules::preferences::domain::Preferences;

/// Switch between French and English
#[utoipa::path(
    post,
    path = "/api/preferences/language/toggle",
    tag = "preferences",
    responses(
        (status = 200, description = "Preferences after the switch", body = inline(SuccessResponse<Preferences>)),
    )
)]
#[post("/api/preferences/language/toggle")]
pub async fn toggle_language_handler(req: HttpRequest) -> HttpResponse {
    let mut prefs = read_preferences(&req);
    prefs.language = prefs.language.toggled();
    preferences_response(prefs)
}

/// Switch between light and dark
#[utoipa::path(
    post,
    path = "/api/preferences/theme/toggle",
    tag = "preferences",
    responses(
        (status = 200, description = "Preferences after the switch", body = inline(SuccessResponse<Preferences>)),
    )
)]
#[post("/api/preferences/theme/toggle")]
pub async fn toggle_theme_handler(req: HttpRequest) -> HttpResponse {
    let mut prefs = read_preferences(&req);
    prefs.theme = prefs.theme.toggled();
    preferences_response(prefs)
}
