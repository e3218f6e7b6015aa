//! One-shot flash notices, delivered as a cookie the admin UI reads and
//! clears after the redirect.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Admin UI page the denied caller is sent back to.
pub const SURVEY_LIST_PATH: &str = "/admin/surveys";

pub const FLASH_COOKIE: &str = "flash";

pub fn flash_error(jar: CookieJar, message: &str) -> CookieJar {
    let payload = serde_json::json!({ "level": "error", "message": message });
    let cookie = Cookie::build((FLASH_COOKIE, payload.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// The deny response shared by every guarded survey action: flash the notice
/// and send the caller back to the list. Never an error page.
pub fn unauthorized_redirect(jar: CookieJar) -> Response {
    let jar = flash_error(jar, "unauthorized action");
    (jar, Redirect::to(SURVEY_LIST_PATH)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_cookie_carries_the_notice() {
        let jar = flash_error(CookieJar::new(), "unauthorized action");
        let cookie = jar.get(FLASH_COOKIE).unwrap();
        let value: serde_json::Value = serde_json::from_str(cookie.value()).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["message"], "unauthorized action");
    }

    #[test]
    fn deny_response_redirects_to_the_list() {
        let response = unauthorized_redirect(CookieJar::new());
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            SURVEY_LIST_PATH
        );
        assert!(response.headers().contains_key(axum::http::header::SET_COOKIE));
    }
}
