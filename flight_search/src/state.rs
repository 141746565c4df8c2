use crate::client::{FlightLookup, SearchError};
use shared::flights::FlightSummary;
use tracing::{debug, warn};

pub const SEARCH_FAILED_MESSAGE: &str =
    "An error occurred while searching for flights. Please try again.";

/// Everything the search view knows. Lives for one session and is never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<FlightSummary>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set once the first real search is sent.
    pub searched: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Starts a search, returning the query to send.
    ///
    /// Blank queries return `None` and leave the state untouched.
    pub fn begin(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            debug!("ignoring blank flight query");
            return None;
        }

        self.loading = true;
        self.error = None;
        self.searched = true;
        self.results.clear();
        Some(self.query.clone())
    }

    pub fn finish(&mut self, outcome: Result<Vec<FlightSummary>, SearchError>) {
        match outcome {
            Ok(results) => {
                debug!(count = results.len(), "flight search completed");
                self.results = results;
            }
            Err(e) => {
                warn!(error = ?e, "flight search failed");
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Runs a full search round trip against `lookup`.
    pub async fn submit<L: FlightLookup>(&mut self, lookup: &L) {
        let Some(query) = self.begin() else {
            return;
        };
        let outcome = lookup.lookup(&query).await;
        self.finish(outcome);
    }

    pub fn shows_no_results(&self) -> bool {
        self.searched && !self.loading && self.results.is_empty() && self.error.is_none()
    }
}
