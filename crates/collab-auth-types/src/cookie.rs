//! Cookie builders for the session access and refresh tokens.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const COLLAB_ACCESS_TOKEN: &str = "collab_access_token";

/// Cookie name for the refresh token.
pub const COLLAB_REFRESH_TOKEN: &str = "collab_refresh_token";

/// Access-token JWT lifetime in seconds (4 hours).
pub const ACCESS_TOKEN_EXP: u64 = 14400;

/// Refresh-token JWT lifetime in seconds (7 days).
pub const REFRESH_TOKEN_EXP: u64 = 604800;

/// Refresh cookies are only sent to the token endpoint.
const REFRESH_COOKIE_PATH: &str = "/auth/token";

fn session_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    domain: String,
    max_age: Duration,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .domain(domain)
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Set the access-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use collab_auth_types::cookie::{set_access_token_cookie, COLLAB_ACCESS_TOKEN};
///
/// let jar = CookieJar::new();
/// let jar = set_access_token_cookie(jar, "token_value".to_string(), "example.com".to_string());
/// let cookie = jar.get(COLLAB_ACCESS_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(14400)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(jar: CookieJar, value: String, domain: String) -> CookieJar {
    jar.add(session_cookie(
        COLLAB_ACCESS_TOKEN,
        value,
        "/",
        domain,
        Duration::seconds(ACCESS_TOKEN_EXP as i64),
    ))
}

/// Set the refresh-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use collab_auth_types::cookie::{set_refresh_token_cookie, COLLAB_REFRESH_TOKEN};
///
/// let jar = CookieJar::new();
/// let jar = set_refresh_token_cookie(jar, "refresh_value".to_string(), "example.com".to_string());
/// let cookie = jar.get(COLLAB_REFRESH_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/auth/token"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_refresh_token_cookie(jar: CookieJar, value: String, domain: String) -> CookieJar {
    jar.add(session_cookie(
        COLLAB_REFRESH_TOKEN,
        value,
        REFRESH_COOKIE_PATH,
        domain,
        Duration::seconds(REFRESH_TOKEN_EXP as i64),
    ))
}

/// Clear both session cookies by setting Max-Age to 0 (logout).
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use collab_auth_types::cookie::{
///     clear_cookies, set_access_token_cookie, COLLAB_ACCESS_TOKEN, COLLAB_REFRESH_TOKEN,
/// };
///
/// let jar = set_access_token_cookie(CookieJar::new(), "a".to_string(), "example.com".to_string());
/// let jar = clear_cookies(jar, "example.com".to_string());
/// assert_eq!(jar.get(COLLAB_ACCESS_TOKEN).unwrap().max_age(), Some(time::Duration::ZERO));
/// assert_eq!(jar.get(COLLAB_REFRESH_TOKEN).unwrap().max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_cookies(jar: CookieJar, domain: String) -> CookieJar {
    let access = session_cookie(
        COLLAB_ACCESS_TOKEN,
        String::new(),
        "/",
        domain.clone(),
        Duration::ZERO,
    );
    let refresh = session_cookie(
        COLLAB_REFRESH_TOKEN,
        String::new(),
        REFRESH_COOKIE_PATH,
        domain,
        Duration::ZERO,
    );
    jar.add(access).add(refresh)
}
