use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::types::AccessTokenBody;

use super::ACCESS_TOKEN_COOKIE;

/// Hands the stored access token to the front-end, or 401 when there is no
/// session. Pure cookie read; Spotify is not involved.
pub async fn access_token(jar: CookieJar) -> Response {
    match jar.get(ACCESS_TOKEN_COOKIE) {
        Some(cookie) => Json(AccessTokenBody {
            access_token: cookie.value().to_string(),
        })
        .into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}
