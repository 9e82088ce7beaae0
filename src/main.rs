use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use sporauth::{
    config::{self, AuthConfig},
    error,
    server::{self, AppState},
    spotify::auth::SpotifyTokenClient,
    success,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Bind address for the HTTP server; overrides SERVER_ADDRESS
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };
    success!("Loaded configuration for client {}", config.client_id);

    let config = Arc::new(config);
    let state = AppState {
        exchange: SpotifyTokenClient::new(Arc::clone(&config)),
        config,
    };

    let addr = cli.address.unwrap_or_else(config::server_addr);
    if let Err(e) = server::start_api_server(&addr, state).await {
        error!("Server terminated: {}", e);
    }
}
