use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config::AuthConfig, info, spotify::auth::TokenExchange};

/// Shared request context: the static configuration plus the outbound
/// token-exchange client. Cloned per request; holds no mutable state.
#[derive(Clone)]
pub struct AppState<X> {
    pub config: Arc<AuthConfig>,
    pub exchange: X,
}

/// Builds the auth-flow router over any token-exchange implementation.
///
/// Production wires in [`crate::spotify::auth::SpotifyTokenClient`]; tests
/// pass a fake to keep the provider out of the loop.
pub fn router<X>(state: AppState<X>) -> Router
where
    X: TokenExchange + Clone + 'static,
{
    Router::new()
        .route("/login", get(api::login::<X>))
        .route("/callback", get(api::callback::<X>))
        .route("/refreshToken", get(api::refresh_token::<X>))
        .route("/accessToken", get(api::access_token))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .with_state(state)
}

pub async fn start_api_server<X>(addr: &str, state: AppState<X>) -> Res<()>
where
    X: TokenExchange + Clone + 'static,
{
    let app = router(state);

    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
