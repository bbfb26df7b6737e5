use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};

use tracing::warn;

use crate::modules::preferences::domain::Preferences;
use crate::shared::api::ApiResponse;

pub const LANGUAGE_COOKIE: &str = "language";
pub const THEME_COOKIE: &str = "theme";
pub const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

const MAX_AGE_DAYS: i64 = 365;

pub fn read_preferences(req: &HttpRequest) -> Preferences {
    let language = req.cookie(LANGUAGE_COOKIE);
    let theme = req.cookie(THEME_COOKIE);
    let hint = req
        .headers()
        .get(COLOR_SCHEME_HINT)
        .and_then(|v| v.to_str().ok());

    Preferences::resolve(
        language.as_ref().map(|c| c.value()),
        theme.as_ref().map(|c| c.value()),
        hint,
    )
}

fn cookie(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(MAX_AGE_DAYS))
        .finish()
}

/// 200 with the preferences as body, both cookies refreshed.
pub fn preferences_response(prefs: Preferences) -> HttpResponse {
    let mut resp = ApiResponse::success(prefs);
    for c in [
        cookie(LANGUAGE_COOKIE, prefs.language.as_str()),
        cookie(THEME_COOKIE, prefs.theme.as_str()),
    ] {
        if let Err(e) = resp.add_cookie(&c) {
            warn!(cookie = c.name(), error = %e, "Could not set preference cookie");
        }
    }
    resp
}
