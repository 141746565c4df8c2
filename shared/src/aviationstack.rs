use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::AccessKey;

pub const DEFAULT_BASE_URL: &str = "http://api.aviationstack.com/v1";
const FLIGHTS_PATH: &str = "/flights";

/// Root of the `/flights` payload. The provider omits `data` on some error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightsResponse {
    #[serde(default)]
    pub data: Option<Vec<FlightRecord>>,
}

/// One provider record. Sub-objects and `flight_status` are required; text
/// leaves may be `null` or missing and read as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    pub flight_status: String,
    pub departure: AirportSchedule,
    pub arrival: AirportSchedule,
    pub airline: Airline,
    pub flight: FlightIdent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirportSchedule {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub airport: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timezone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub iata: String,
    #[serde(default)]
    pub terminal: Option<String>,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scheduled: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Airline {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightIdent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub iata: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider responded with status {0}")]
    Status(StatusCode),
    #[error("provider request failed: {0}")]
    Transport(reqwest::Error),
    #[error("provider payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the access key.
        Self::Transport(e.without_url())
    }
}

#[derive(Clone)]
pub struct AviationstackClient {
    client: Client,
    base_url: String,
}

impl AviationstackClient {
    pub fn new_with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up scheduled flights by IATA flight code, e.g. `UA123`. Never cached.
    pub async fn flights_by_iata(
        &self,
        access_key: &AccessKey,
        flight_iata: &str,
    ) -> Result<FlightsResponse, ProviderError> {
        let url = format!("{}{FLIGHTS_PATH}", self.base_url);
        let resp = self
            .client
            .get(url)
            .query(&[
                ("access_key", access_key.expose()),
                ("flight_iata", flight_iata),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a provider timestamp. Values without an offset are read as UTC.
pub fn parse_scheduled(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let err = match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => return Ok(ts.with_timezone(&Utc)),
        Err(e) => e,
    };
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or(err)
}
