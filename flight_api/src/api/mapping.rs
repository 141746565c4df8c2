use chrono::{DateTime, Utc};
use shared::aviationstack::{AirportSchedule, FlightRecord, parse_scheduled};
use shared::flights::{Endpoint, FlightSummary};
use tracing::warn;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Duration shown when either scheduled time cannot be parsed. Clients already
/// render this value, so it is kept as-is.
pub const UNKNOWN_DURATION: &str = "NaNh NaNm";

/// Maps provider records to summaries, keeping provider order.
pub fn summarize(records: Vec<FlightRecord>) -> Vec<FlightSummary> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| summarize_record(index, record))
        .collect()
}

fn summarize_record(index: usize, record: FlightRecord) -> FlightSummary {
    let duration = match (
        scheduled_time(index, &record.departure),
        scheduled_time(index, &record.arrival),
    ) {
        (Some(departure), Some(arrival)) => format_duration(departure, arrival),
        _ => UNKNOWN_DURATION.to_string(),
    };

    FlightSummary {
        unique_id: unique_id(&record.flight.iata, &record.departure.scheduled, index),
        flight_number: record.flight.iata,
        airline: record.airline.name,
        origin: endpoint(record.departure),
        destination: endpoint(record.arrival),
        duration,
        status: capitalize_first(&record.flight_status),
    }
}

fn scheduled_time(index: usize, schedule: &AirportSchedule) -> Option<DateTime<Utc>> {
    match parse_scheduled(&schedule.scheduled) {
        Ok(ts) => Some(ts),
        Err(e) => {
            warn!(index, value = %schedule.scheduled, error = %e, "unparsable scheduled time");
            None
        }
    }
}

fn endpoint(schedule: AirportSchedule) -> Endpoint {
    Endpoint {
        code: schedule.iata,
        city: schedule.airport,
        time: schedule.scheduled,
        timezone: schedule.timezone,
        terminal: schedule.terminal,
        gate: schedule.gate,
    }
}

/// The index keeps ids distinct when the provider repeats a flight/time pair.
pub fn unique_id(flight_iata: &str, departure_scheduled: &str, index: usize) -> String {
    format!("{flight_iata}-{departure_scheduled}-{index}")
}

/// Formats as `<hours>h <minutes>m`, flooring both parts.
///
/// Arrival before departure is not corrected, e.g. -90 minutes formats as `-2h -30m`.
pub fn format_duration(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> String {
    let millis = (arrival - departure).num_milliseconds();
    let hours = millis.div_euclid(MILLIS_PER_HOUR);
    let minutes = (millis % MILLIS_PER_HOUR).div_euclid(MILLIS_PER_MINUTE);
    format!("{hours}h {minutes}m")
}

/// Uppercases the first character only: `landed` -> `Landed`, `ON TIME` stays.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
