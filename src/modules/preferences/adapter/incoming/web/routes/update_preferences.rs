use actix_web::{put, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::preferences::adapter::incoming::web::cookies::{
    preferences_response, read_preferences,
};
use crate::modules::preferences::domain::{Language, Preferences, Theme};

/// Either field may be left out to keep its current value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PreferencesUpdate {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
}

/// Set language and/or theme
#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "preferences",
    request_body = PreferencesUpdate,
    responses(
        (status = 200, description = "Stored preferences", body = inline(SuccessResponse<Preferences>)),
        (status = 400, description = "Unknown language or theme", body = ErrorResponse),
    )
)]
#[put("/api/preferences")]
pub async fn update_preferences_handler(
    req: HttpRequest,
    update: web::Json<PreferencesUpdate>,
) -> HttpResponse {
    let current = read_preferences(&req);
    let update = update.into_inner();

    preferences_response(Preferences {
        language: update.language.unwrap_or(current.language),
        theme: update.theme.unwrap_or(current.theme),
    })
}
