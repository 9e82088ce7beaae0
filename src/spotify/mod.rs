//! # Spotify Integration Module
//!
//! This module holds the server-to-server half of the OAuth 2.0
//! authorization-code flow: everything that talks to Spotify's accounts
//! service directly rather than through the user's browser.
//!
//! ## Overview
//!
//! The browser only ever sees two Spotify URLs: the authorization page it is
//! redirected to at login, and the redirect back to `/callback`. Every other
//! interaction (exchanging an authorization code for tokens, minting a fresh
//! access token from a refresh token) is an outbound HTTPS POST from this
//! module to the token endpoint, authenticated with the client credentials.
//!
//! ## Authentication Strategy
//!
//! The flow is the classic confidential-client variant of OAuth 2.0:
//!
//! 1. **Authorization Request**: the user is sent to Spotify with the client
//!    ID, requested scopes, callback URI and an anti-CSRF state nonce
//! 2. **Consent**: the user grants (or denies) the requested permissions
//! 3. **Code Exchange**: the short-lived authorization code is exchanged for
//!    an access/refresh token pair, authenticated with a Basic header built
//!    from the client ID and secret
//! 4. **Refresh**: the refresh token is exchanged for new access tokens
//!    whenever the caller asks for one
//!
//! Tokens are never stored on this server; the controller layer writes them
//! into the client's cookie jar.
//!
//! ## Error Handling
//!
//! The exchange client makes exactly one attempt per call. Transport errors
//! and unparseable bodies surface as `Err(String)`; non-success upstream
//! statuses are returned to the caller inside [`crate::types::GrantResponse`]
//! so the controller can decide how to surface them. Nothing is retried.
//!
//! ## Related Modules
//!
//! - [`crate::api`] - HTTP endpoints driving this client
//! - [`crate::types`] - Shared response structures

pub mod auth;
