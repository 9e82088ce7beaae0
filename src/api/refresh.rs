use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    server::AppState, spotify::auth::TokenExchange, types::AccessTokenBody, warning,
};

use super::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, token_cookie};

/// Mints a new access token from the stored refresh token.
///
/// Script-facing: answers with raw status codes instead of redirects. A
/// missing refresh-token cookie is a 401 without any upstream call; upstream
/// trouble of any kind is a bare 500.
pub async fn refresh_token<X: TokenExchange>(
    State(state): State<AppState<X>>,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let Some(refresh) = jar.get(REFRESH_TOKEN_COOKIE).map(|c| c.value().to_string()) else {
        warning!("No refresh token.");
        return (jar, StatusCode::UNAUTHORIZED.into_response());
    };

    let response = match state.exchange.refresh_access_token(&refresh).await {
        Ok(response) => response,
        Err(e) => {
            warning!("Token refresh failed: {}", e);
            return (jar, StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
    };

    if !response.status.is_success() {
        warning!(
            "Spotify bad status when refreshing token: {}",
            response.status
        );
        return (jar, StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }

    let Some(access_token) = response.body["access_token"].as_str() else {
        warning!("No access token in refresh response.");
        return (jar, StatusCode::INTERNAL_SERVER_ERROR.into_response());
    };

    let mut jar = jar.add(token_cookie(ACCESS_TOKEN_COOKIE, access_token));

    // Spotify does not rotate refresh tokens today; persist one if it ever
    // shows up rather than silently dropping it.
    if let Some(rotated) = response.body["refresh_token"].as_str() {
        jar = jar.add(token_cookie(REFRESH_TOKEN_COOKIE, rotated));
    }

    let body = AccessTokenBody {
        access_token: access_token.to_string(),
    };
    (jar, Json(body).into_response())
}
