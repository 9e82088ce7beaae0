use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::{server::AppState, spotify, spotify::auth::TokenExchange, utils};

use super::STATE_COOKIE;

/// Length of the anti-CSRF state nonce.
const STATE_LENGTH: usize = 16;

/// An abandoned login attempt should not leave a live nonce behind.
const STATE_TTL: Duration = Duration::minutes(10);

/// Begins the OAuth flow.
///
/// Generates a fresh state nonce, stores it in a short-lived cookie and
/// redirects the browser to Spotify's authorization page. Always redirects;
/// there is no failure path.
pub async fn login<X: TokenExchange>(
    State(state): State<AppState<X>>,
    jar: CookieJar,
) -> (CookieJar, Response) {
    let nonce = utils::generate_state(STATE_LENGTH);

    let cookie = Cookie::build((STATE_COOKIE, nonce.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(STATE_TTL)
        .build();

    let url = spotify::auth::authorize_url(&state.config, &nonce);
    (jar.add(cookie), utils::found(&url))
}
