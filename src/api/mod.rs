//! # API Module
//!
//! This module provides the HTTP endpoints of the auth proxy: the four
//! user-facing operations of the OAuth flow plus a read-only session accessor
//! and a health check.
//!
//! ## Endpoints
//!
//! ### Auth flow
//!
//! - [`login`] - issues the anti-CSRF state nonce and redirects the browser
//!   to Spotify's authorization page
//! - [`callback`] - Spotify's redirect target; validates the state, exchanges
//!   the authorization code for tokens and stores them in cookies
//! - [`refresh_token`] - script-facing endpoint that mints a new access token
//!   from the stored refresh token
//! - [`logout`] - clears the access-token cookie
//!
//! ### Session
//!
//! - [`access_token`] - hands the stored access token to the front-end
//!
//! ### Monitoring
//!
//! - [`health`] - application status and version for monitoring systems
//!
//! ## Response Conventions
//!
//! The flow endpoints reached by browser navigation (`/login`, `/callback`)
//! always answer with a plain 302; callback failures are signalled to the
//! front-end through an `error` query parameter on the redirect target. The
//! script-facing endpoints (`/refreshToken`, `/accessToken`) answer with raw
//! status codes and JSON bodies instead, since their caller is `fetch`, not a
//! navigation.
//!
//! ## Session State
//!
//! There is none on the server. The ephemeral state nonce and both tokens
//! live in the client's cookie jar under the names below, so concurrent
//! requests from different clients cannot interfere with each other.
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - the outbound token-exchange client
//! - [`crate::server`] - router wiring and shared state

use axum_extra::extract::cookie::Cookie;

mod callback;
mod health;
mod login;
mod logout;
mod refresh;
mod session;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh_token;
pub use session::access_token;

/// Cookie carrying the ephemeral anti-CSRF nonce between login and callback.
pub const STATE_COOKIE: &str = "spotify_auth_state";
/// Cookie carrying the current access token.
pub const ACCESS_TOKEN_COOKIE: &str = "spotify_access_token";
/// Cookie carrying the long-lived refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "spotify_refresh_token";

// Token cookies are session cookies; their contents expire upstream, not in
// the browser. HttpOnly because the front-end reads tokens via /accessToken.
pub(crate) fn token_cookie(name: &'static str, value: &str) -> Cookie<'static> {
    Cookie::build((name, value.to_string()))
        .path("/")
        .http_only(true)
        .build()
}
