use actix_web::{get, HttpRequest, HttpResponse};

use crate::api::schemas::SuccessResponse;
use crate::modules::preferences::adapter::incoming::web::cookies::{
    preferences_response, read_preferences,
};
use crate::modules::preferences::domain::Preferences;

/// Current language and theme
///
/// Read from the `language` and `theme` cookies. Without a theme cookie the
/// `Sec-CH-Prefers-Color-Scheme` hint decides.
#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = "preferences",
    responses(
        (status = 200, description = "Resolved preferences", body = inline(SuccessResponse<Preferences>)),
    )
)]
#[get("/api/preferences")]
pub async fn get_preferences_handler(req: HttpRequest) -> HttpResponse {
    preferences_response(read_preferences(&req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn defaults_without_cookies() {
        let app = test::init_service(App::new().service(get_preferences_handler)).await;
        let req = test::TestRequest::get().uri("/api/preferences").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["language"], "fr");
        assert_eq!(body["data"]["theme"], "light");
    }

    #[actix_web::test]
    async fn cookies_win_over_system_hint() {
        let app = test::init_service(App::new().service(get_preferences_handler)).await;
        let req = test::TestRequest::get()
            .uri("/api/preferences")
            .cookie(Cookie::new("language", "en"))
            .cookie(Cookie::new("theme", "light"))
            .insert_header(("Sec-CH-Prefers-Color-Scheme", "\"dark\""))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["language"], "en");
        assert_eq!(body["data"]["theme"], "light");
    }

    #[actix_web::test]
    async fn system_hint_sets_theme_when_unset() {
        let app = test::init_service(App::new().service(get_preferences_handler)).await;
        let req = test::TestRequest::get()
            .uri("/api/preferences")
            .insert_header(("Sec-CH-Prefers-Color-Scheme", "\"dark\""))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["theme"], "dark");
    }
}
