// Cookie helpers for the theme selection.
// The theme cookie is the only state the server hands to the browser.

use axum::http::HeaderMap;
use axum::http::header;

pub const THEME_COOKIE: &str = "theme";

/// One year, matching how long a theme choice should stick.
const THEME_COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Read a cookie value from the request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build the Set-Cookie value persisting a theme selection.
pub fn theme_cookie(theme_id: &str) -> String {
    format!("{THEME_COOKIE}={theme_id}; Path=/; Max-Age={THEME_COOKIE_MAX_AGE}; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_value_single() {
        let headers = headers("theme=solar_dark");
        assert_eq!(
            cookie_value(&headers, "theme").as_deref(),
            Some("solar_dark")
        );
    }

    #[test]
    fn test_cookie_value_among_many() {
        let headers = headers("session=abc123; theme=light_clean; other=1");
        assert_eq!(
            cookie_value(&headers, "theme").as_deref(),
            Some("light_clean")
        );
    }

    #[test]
    fn test_cookie_value_missing() {
        let headers = headers("session=abc123");
        assert_eq!(cookie_value(&headers, "theme"), None);

        let empty = HeaderMap::new();
        assert_eq!(cookie_value(&empty, "theme"), None);
    }

    #[test]
    fn test_theme_cookie_format() {
        let cookie = theme_cookie("minimal_dark");
        assert!(cookie.starts_with("theme=minimal_dark;"));
        assert!(cookie.contains("Max-Age=31536000"));
        assert!(cookie.contains("Path=/"));
    }
}
