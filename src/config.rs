//! Configuration management for the Spotify auth proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials and URLs are collected
//! once at startup into an [`AuthConfig`] that is handed to the router, so
//! request handlers never reach into the process environment themselves and
//! tests can construct a config with fake values.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Variables already present in the process environment take precedence over
/// file contents. A missing file is not an error; deployments usually inject
/// the variables directly.
///
/// # Example
///
/// ```
/// use sporauth::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Everything the auth flow needs to know about its surroundings.
///
/// Built once from the environment via [`AuthConfig::from_env`] and passed
/// into the router at construction. Tests fill the fields directly instead.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Client ID issued by the Spotify developer dashboard.
    pub client_id: String,
    /// Client secret paired with the client ID.
    pub client_secret: String,
    /// Public base URL of this backend, used to derive the callback URI.
    pub public_url: String,
    /// Origin of the single-page front-end, target of post-flow redirects.
    pub frontend_origin: String,
    /// Spotify's user-facing authorization endpoint.
    pub auth_url: String,
    /// Spotify's server-to-server token endpoint.
    pub token_url: String,
}

impl AuthConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Client credentials and the two public URLs are required; the Spotify
    /// endpoint URLs default to the production accounts service and only need
    /// to be set when pointing the proxy at a stand-in server.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable.
    ///
    /// # Example
    ///
    /// ```
    /// use sporauth::config::AuthConfig;
    ///
    /// let config = AuthConfig::from_env().expect("incomplete environment");
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(AuthConfig {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            public_url: require("PUBLIC_URL")?,
            frontend_origin: require("FRONTEND_ORIGIN_URL")?,
            auth_url: env::var("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string()),
        })
    }

    /// Callback target registered with Spotify, derived from the public URL.
    pub fn redirect_uri(&self) -> String {
        format!("{}/callback", self.public_url)
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

/// Returns the bind address for the HTTP server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:8888` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8888"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}
