use serde::{Deserialize, Serialize};

/// Display-ready view of one scheduled flight, as returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary {
    pub unique_id: String,
    pub flight_number: String,
    pub airline: String,
    pub origin: Endpoint,
    pub destination: Endpoint,
    pub duration: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub code: String,
    /// Airport name; the provider has no separate city field.
    pub city: String,
    /// Scheduled time exactly as the provider sent it.
    pub time: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

impl FlightSummary {
    pub fn is_on_time(&self) -> bool {
        self.status == ON_TIME_STATUS
    }
}

pub const ON_TIME_STATUS: &str = "On Time";
