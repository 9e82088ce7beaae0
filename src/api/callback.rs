use axum::{
    extract::{Query, State},
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    server::AppState, spotify::auth::TokenExchange, types::CallbackQuery, utils, warning,
};

use super::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, STATE_COOKIE, token_cookie};

/// Spotify's redirect target, second half of the login flow.
///
/// Validates the returned state against the nonce issued at login, exchanges
/// the authorization code for tokens and stores them in cookies. Every
/// outcome is a redirect back to the front-end origin; failures carry an
/// `error` query parameter for the front-end to display.
pub async fn callback<X: TokenExchange>(
    State(state): State<AppState<X>>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> (CookieJar, Response) {
    let origin = state.config.frontend_origin.clone();

    let stored = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    if params.state.is_none() || params.state != stored {
        // Never contact the provider on a state we did not issue.
        return (
            jar,
            utils::found(&utils::origin_with_error(&origin, "state_mismatch")),
        );
    }

    // The nonce is single use, whatever happens next.
    let jar = jar.remove(Cookie::build(STATE_COOKIE).path("/"));

    if params.error.as_deref() == Some("access_denied") {
        // The user refused consent; Spotify sent no code.
        return (
            jar,
            utils::found(&utils::origin_with_error(&origin, "access_denied")),
        );
    }

    let code = params.code.unwrap_or_default();
    let response = match state
        .exchange
        .exchange_code(&code, &state.config.redirect_uri())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return (
                jar,
                utils::found(&utils::origin_with_error(&origin, "server_error")),
            );
        }
    };

    if !response.status.is_success() {
        warning!(
            "Spotify bad status when fetching token: {}",
            response.status
        );
        return (
            jar,
            utils::found(&utils::origin_with_error(&origin, "server_error")),
        );
    }

    let access_token = response.body["access_token"].as_str().unwrap_or_default();
    let refresh_token = response.body["refresh_token"].as_str().unwrap_or_default();

    if access_token.is_empty() || refresh_token.is_empty() {
        return (
            jar,
            utils::found(&utils::origin_with_error(&origin, "authentication_failure")),
        );
    }

    let jar = jar
        .add(token_cookie(ACCESS_TOKEN_COOKIE, access_token))
        .add(token_cookie(REFRESH_TOKEN_COOKIE, refresh_token));

    // Success is signalled by the access-token cookie alone.
    (jar, utils::found(&origin))
}
