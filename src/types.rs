use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters Spotify appends when redirecting back to `/callback`.
///
/// Either `code` (user consented) or `error` (user denied, or the request was
/// malformed) is present; `state` echoes the nonce issued at login.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Raw outcome of one token-endpoint call.
///
/// Carries the upstream HTTP status together with the parsed JSON body; the
/// body is `Null` when the status was not a success, since Spotify's error
/// pages are not guaranteed to be JSON.
#[derive(Debug, Clone)]
pub struct GrantResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// JSON body returned by `/refreshToken` and `/accessToken`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenBody {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
