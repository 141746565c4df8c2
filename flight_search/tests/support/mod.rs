use shared::flights::{Endpoint, FlightSummary};

pub fn flight(flight_number: &str, status: &str, index: usize) -> FlightSummary {
    FlightSummary {
        unique_id: format!("{flight_number}-2024-01-01T10:00:00+00:00-{index}"),
        flight_number: flight_number.to_string(),
        airline: "United Airlines".to_string(),
        origin: Endpoint {
            code: "JFK".to_string(),
            city: "John F Kennedy International".to_string(),
            time: "2024-01-01T10:00:00+00:00".to_string(),
            timezone: "America/New_York".to_string(),
            terminal: Some("4".to_string()),
            gate: Some("B22".to_string()),
        },
        destination: Endpoint {
            code: "LAX".to_string(),
            city: "Los Angeles International".to_string(),
            time: "2024-01-01T13:45:00+00:00".to_string(),
            timezone: "America/Los_Angeles".to_string(),
            terminal: None,
            gate: None,
        },
        duration: "3h 45m".to_string(),
        status: status.to_string(),
    }
}
