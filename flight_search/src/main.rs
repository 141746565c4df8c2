use flight_search::client::{FlightLookup, GatewayClient};
use flight_search::render::{PLACEHOLDER, banner, render};
use flight_search::state::SearchState;
use shared::error::InitializationError;
use shared::{init_tracing, load_config};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let config = load_config().map_err(InitializationError::Config)?;
    info!(gateway = %config.search.gateway_url, "starting flight search");

    let gateway =
        GatewayClient::new_with_client(reqwest::Client::new(), &config.search.gateway_url);
    let mut state = SearchState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", banner());
    loop {
        print!("{PLACEHOLDER}: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        state.set_query(line);

        // Split begin/finish so the loading indicator is visible while waiting.
        let Some(query) = state.begin() else {
            continue;
        };
        print!("{}", render(&state));
        std::io::stdout().flush()?;

        let outcome = gateway.lookup(&query).await;
        state.finish(outcome);
        print!("{}", render(&state));
    }

    Ok(())
}
