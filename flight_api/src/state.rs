use axum::extract::FromRef;
use shared::aviationstack::AviationstackClient;
use shared::{AccessKey, ProviderConfig};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub provider: AviationstackClient,
    /// Read per request, so a missing key fails lookups instead of startup.
    pub access_key: Option<AccessKey>,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            provider: AviationstackClient::new_with_client(http_client, config.base_url.clone()),
            access_key: config.access_key.clone(),
        }
    }
}
