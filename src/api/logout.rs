use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::ACCESS_TOKEN_COOKIE;

/// Ends the session by clearing the access-token cookie.
///
/// The refresh-token cookie survives, so a later `/refreshToken` call can
/// re-establish the session without a full login.
pub async fn logout(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
}
