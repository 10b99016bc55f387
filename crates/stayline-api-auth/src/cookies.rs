//! Session cookie helpers.
//!
//! Both tokens travel as `HttpOnly; Secure; SameSite=Strict; Path=/`
//! cookies. Signout clears them with an empty value and `Max-Age=0`.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use chrono::{DateTime, Utc};

/// Cookie carrying the signed access claims.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookie carrying the signed refresh claims.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Build a session cookie value expiring at the given instant.
#[must_use]
pub fn session_cookie(name: &str, value: &str, expires_at: DateTime<Utc>) -> String {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);
    format!("{name}={value}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={max_age}")
}

/// Build the clearing form of a session cookie.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=0")
}

/// Append both session cookies to response headers.
pub fn set_session_cookies(
    headers: &mut HeaderMap,
    access_token: &str,
    access_expires_at: DateTime<Utc>,
    refresh_token: &str,
    refresh_expires_at: DateTime<Utc>,
) {
    append_cookie(
        headers,
        &session_cookie(ACCESS_TOKEN_COOKIE, access_token, access_expires_at),
    );
    append_cookie(
        headers,
        &session_cookie(REFRESH_TOKEN_COOKIE, refresh_token, refresh_expires_at),
    );
}

/// Append cleared forms of both session cookies to response headers.
pub fn clear_session_cookies(headers: &mut HeaderMap) {
    append_cookie(headers, &expired_cookie(ACCESS_TOKEN_COOKIE));
    append_cookie(headers, &expired_cookie(REFRESH_TOKEN_COOKIE));
}

fn append_cookie(headers: &mut HeaderMap, cookie: &str) {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        headers.append(SET_COOKIE, value);
    }
}

/// Extract a cookie value from request headers.
///
/// Parses the `Cookie` header (format: `name1=value1; name2=value2`).
#[must_use]
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(COOKIE)?;
    let cookie_str = cookie_header.to_str().ok()?;

    for part in cookie_str.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(&format!("{name}=")) {
            if value.is_empty() {
                return None;
            }
            return Some(value.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie(
            ACCESS_TOKEN_COOKIE,
            "tok123",
            Utc::now() + Duration::minutes(15),
        );

        assert!(cookie.starts_with("access_token=tok123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        // 15 minutes, allowing for the moment between now() calls.
        assert!(cookie.contains("Max-Age=89") || cookie.contains("Max-Age=900"));
    }

    #[test]
    fn past_expiry_clamps_to_zero() {
        let cookie = session_cookie("access_token", "tok", Utc::now() - Duration::hours(1));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn expired_cookie_is_empty_with_zero_age() {
        let cookie = expired_cookie(REFRESH_TOKEN_COOKIE);
        assert!(cookie.starts_with("refresh_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn set_session_cookies_appends_two_headers() {
        let mut headers = HeaderMap::new();
        let now = Utc::now();
        set_session_cookies(
            &mut headers,
            "access",
            now + Duration::minutes(15),
            "refresh",
            now + Duration::days(30),
        );

        let cookies: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies[0].to_str().unwrap().starts_with("access_token="));
        assert!(cookies[1].to_str().unwrap().starts_with("refresh_token="));
    }

    #[test]
    fn clear_session_cookies_appends_two_headers() {
        let mut headers = HeaderMap::new();
        clear_session_cookies(&mut headers);

        let cookies: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|c| c.to_str().unwrap().contains("Max-Age=0")));
    }

    #[test]
    fn extract_finds_cookie_among_many() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("other=x; access_token=abc.def.ghi; more=y"),
        );

        assert_eq!(
            extract_cookie(&headers, ACCESS_TOKEN_COOKIE),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn extract_missing_cookie_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("other=x"));

        assert_eq!(extract_cookie(&headers, ACCESS_TOKEN_COOKIE), None);
        assert_eq!(extract_cookie(&HeaderMap::new(), ACCESS_TOKEN_COOKIE), None);
    }

    #[test]
    fn extract_empty_value_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("access_token="));

        assert_eq!(extract_cookie(&headers, ACCESS_TOKEN_COOKIE), None);
    }
}
