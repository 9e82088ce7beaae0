use std::{future::Future, sync::Arc};

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{config::AuthConfig, types::GrantResponse};

/// Permissions requested from Spotify during login: private profile, email
/// address and top items.
pub const SCOPE: &str = "user-read-private user-read-email user-top-read";

/// Outbound token-endpoint operations.
///
/// The controller layer only ever needs these two call shapes. The production
/// implementation is [`SpotifyTokenClient`]; tests substitute a fake so flow
/// logic can be exercised without a network.
pub trait TokenExchange: Send + Sync {
    /// Exchanges an authorization code for an access/refresh token pair.
    fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> impl Future<Output = Result<GrantResponse, String>> + Send;

    /// Mints a new access token from a refresh token.
    fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<GrantResponse, String>> + Send;
}

/// Token-endpoint client authenticating with the configured client
/// credentials.
///
/// One form-encoded POST per call, no retries, network-stack default
/// timeouts.
#[derive(Clone)]
pub struct SpotifyTokenClient {
    client: Client,
    config: Arc<AuthConfig>,
}

impl SpotifyTokenClient {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        SpotifyTokenClient {
            client: Client::new(),
            config,
        }
    }

    async fn post_token(&self, form: &[(&str, &str)]) -> Result<GrantResponse, String> {
        let res = self
            .client
            .post(&self.config.token_url)
            .header(
                AUTHORIZATION,
                basic_auth(&self.config.client_id, &self.config.client_secret),
            )
            .form(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = res.status();
        let body = if status.is_success() {
            res.json().await.map_err(|e| e.to_string())?
        } else {
            Value::Null
        };

        Ok(GrantResponse { status, body })
    }
}

impl TokenExchange for SpotifyTokenClient {
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<GrantResponse, String> {
        self.post_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<GrantResponse, String> {
        self.post_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }
}

/// Builds the user-facing authorization URL for the login redirect.
///
/// Embeds the response type, client ID, requested scope, callback URI and the
/// anti-CSRF state nonce, all percent-encoded.
pub fn authorize_url(config: &AuthConfig, state: &str) -> String {
    let redirect_uri = config.redirect_uri();
    let params = [
        ("response_type", "code"),
        ("client_id", config.client_id.as_str()),
        ("scope", SCOPE),
        ("redirect_uri", redirect_uri.as_str()),
        ("state", state),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", config.auth_url, query)
}

fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}
