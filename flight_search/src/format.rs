//! Display helpers for flight cards.
//!
//! Times and dates are shown in UTC regardless of the endpoint's own zone, while the
//! zone's city is printed next to them as a label.

use chrono::{DateTime, Utc};
use shared::aviationstack::parse_scheduled;

fn to_utc(iso: &str) -> Option<DateTime<Utc>> {
    parse_scheduled(iso).ok()
}

/// `2024-01-01T13:45:00Z` -> `01:45 PM`. Unparsable input is returned as-is.
pub fn format_time(iso: &str) -> String {
    match to_utc(iso) {
        Some(ts) => ts.format("%I:%M %p").to_string(),
        None => iso.to_string(),
    }
}

/// `2024-01-01T13:45:00Z` -> `Mon, Jan 1`. Unparsable input is returned as-is.
pub fn format_date(iso: &str) -> String {
    match to_utc(iso) {
        Some(ts) => ts.format("%a, %b %-d").to_string(),
        None => iso.to_string(),
    }
}

/// City segment of an IANA zone: `America/New_York` -> `New York`.
pub fn timezone_label(zone: &str) -> String {
    let city = zone.rsplit('/').next().unwrap_or(zone);
    city.replace('_', " ")
}

/// `Term 4 • Gate B22`, either half alone, or `None` when both are missing.
/// Empty strings count as missing.
pub fn terminal_gate_line(terminal: Option<&str>, gate: Option<&str>) -> Option<String> {
    let terminal = terminal.filter(|t| !t.is_empty());
    let gate = gate.filter(|g| !g.is_empty());
    match (terminal, gate) {
        (Some(t), Some(g)) => Some(format!("Term {t} • Gate {g}")),
        (Some(t), None) => Some(format!("Term {t}")),
        (None, Some(g)) => Some(format!("Gate {g}")),
        (None, None) => None,
    }
}
