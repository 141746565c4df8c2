use reqwest::{Client, StatusCode};
use shared::flights::FlightSummary;
use std::future::Future;
use thiserror::Error;

const FLIGHTS_PATH: &str = "/api/flights";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("gateway responded with status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Anything that can answer a flight-number query.
pub trait FlightLookup {
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<FlightSummary>, SearchError>> + Send;
}

/// HTTP client for the gateway's lookup endpoint.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new_with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl FlightLookup for GatewayClient {
    async fn lookup(&self, query: &str) -> Result<Vec<FlightSummary>, SearchError> {
        let resp = self
            .client
            .get(format!("{}{FLIGHTS_PATH}", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;

        // Forwarded provider statuses come with an empty list, but the view treats
        // every non-success the same way.
        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        Ok(resp.json::<Vec<FlightSummary>>().await?)
    }
}
