use crate::api::error::LookupError;
use crate::api::mapping::summarize;
use axum::Json;
use axum::extract::{Query, State};
use shared::AccessKey;
use shared::aviationstack::AviationstackClient;
use shared::flights::FlightSummary;
use tracing::{debug, info};

const QUERY_PARAM: &str = "query";

/// `GET /api/flights?query=UA123`
///
/// An absent or empty query returns an empty list without calling the provider.
/// When `query` repeats, the first value is used.
pub async fn lookup_flights(
    State(provider): State<AviationstackClient>,
    State(access_key): State<Option<AccessKey>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<FlightSummary>>, LookupError> {
    let Some(query) = first_query(params).filter(|q| !q.is_empty()) else {
        debug!("empty flight query, skipping provider call");
        return Ok(Json(Vec::new()));
    };

    let access_key = access_key.ok_or(LookupError::MissingCredential)?;

    let response = provider.flights_by_iata(&access_key, &query).await?;
    let flights = summarize(response.data.unwrap_or_default());

    info!(query = %query, count = flights.len(), "flight lookup completed");
    Ok(Json(flights))
}

fn first_query(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(name, _)| name == QUERY_PARAM)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_query_value_wins() {
        let params = pairs(&[("foo", "x"), ("query", "UA123"), ("query", "UA1")]);
        assert_eq!(first_query(params).as_deref(), Some("UA123"));
    }

    #[test]
    fn missing_query_is_none() {
        assert_eq!(first_query(pairs(&[("q", "UA123")])), None);
    }
}
