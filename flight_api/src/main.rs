use flight_api::serve;
use flight_api::state::AppState;
use shared::error::InitializationError;
use shared::{init_tracing, load_config, shutdown_listener};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = load_config().map_err(InitializationError::Config)?;
    if config.provider.access_key.is_none() {
        warn!("provider access key is not configured, flight lookups will fail");
    }

    let state = AppState::new(reqwest::Client::new(), &config.provider);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| InitializationError::Bind {
            addr: config.listen_addr.clone(),
            source,
        })?;
    info!("starting server at {}", config.listen_addr);

    let shutdown_token = CancellationToken::new();
    tokio::spawn(shutdown_listener(Some(shutdown_token.clone())));

    serve(listener, state, shutdown_token.cancelled_owned()).await?;

    Ok(())
}
