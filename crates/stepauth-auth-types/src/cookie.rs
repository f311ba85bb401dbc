//! Cookie builders for the session marker and the access credential.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie carrying the session marker between the OTP step and the token step.
pub const SESSION_TOKEN_COOKIE: &str = "session_token";

/// Cookie carrying the access credential to protected routes.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Max-Age of the session-marker cookie in seconds (15 minutes).
pub const SESSION_MARKER_MAX_AGE: i64 = 900;

fn http_only_cookie(name: &'static str, value: String, max_age: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(Duration::seconds(max_age))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Set the session-marker cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use stepauth_auth_types::cookie::{set_session_marker_cookie, SESSION_TOKEN_COOKIE};
///
/// let jar = set_session_marker_cookie(CookieJar::new(), "abc123".to_string(), false);
/// let cookie = jar.get(SESSION_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.value(), "abc123");
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(900)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(!cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_marker_cookie(jar: CookieJar, marker: String, secure: bool) -> CookieJar {
    jar.add(http_only_cookie(
        SESSION_TOKEN_COOKIE,
        marker,
        SESSION_MARKER_MAX_AGE,
        secure,
    ))
}

/// Set the access-credential cookie on the jar, living as long as the credential.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use stepauth_auth_types::cookie::{set_access_token_cookie, ACCESS_TOKEN_COOKIE};
///
/// let jar = set_access_token_cookie(CookieJar::new(), "jwt".to_string(), 900, true);
/// let cookie = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(900)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(jar: CookieJar, token: String, ttl_secs: u64, secure: bool) -> CookieJar {
    jar.add(http_only_cookie(
        ACCESS_TOKEN_COOKIE,
        token,
        ttl_secs as i64,
        secure,
    ))
}
