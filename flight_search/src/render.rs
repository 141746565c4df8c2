use crate::format::{format_date, format_time, terminal_gate_line, timezone_label};
use crate::state::SearchState;
use shared::flights::{Endpoint, FlightSummary};

pub const TITLE: &str = "Funcode Flight Tracker";
pub const TAGLINE: &str = "Real-time flight status and information";
pub const PLACEHOLDER: &str = "Enter flight number (e.g., UA123)";
pub const SEARCHING: &str = "Searching...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    OnTime,
    Delayed,
}

impl StatusBadge {
    pub fn for_flight(flight: &FlightSummary) -> Self {
        if flight.is_on_time() {
            Self::OnTime
        } else {
            Self::Delayed
        }
    }

    fn decorate(self, status: &str) -> String {
        match self {
            Self::OnTime => format!("[ {status} ]"),
            Self::Delayed => format!("[! {status} ]"),
        }
    }
}

pub fn banner() -> String {
    format!("{TITLE}\n{TAGLINE}\n")
}

/// Renders the view below the input line: error, loading, empty state, then cards.
pub fn render(state: &SearchState) -> String {
    let mut lines = Vec::new();

    if state.loading {
        lines.push(SEARCHING.to_string());
    }

    if let Some(error) = &state.error {
        lines.push(error.clone());
    }

    if state.shows_no_results() {
        lines.push(format!("No flights found matching \"{}\"", state.query));
    }

    let mut out = join_lines(&lines);
    for flight in &state.results {
        out.push_str(&render_card(flight));
    }
    out
}

pub fn render_card(flight: &FlightSummary) -> String {
    let badge = StatusBadge::for_flight(flight).decorate(&flight.status);

    let mut lines = vec![format!("{} {}  {badge}", flight.airline, flight.flight_number)];
    lines.extend(endpoint_lines("From", &flight.origin));
    lines.extend(endpoint_lines("To", &flight.destination));
    lines.push(format!("  Duration: {}", flight.duration));
    lines.push(String::new());

    join_lines(&lines)
}

fn endpoint_lines(label: &str, endpoint: &Endpoint) -> Vec<String> {
    let mut lines = vec![format!("  {label:<4} {}  {}", endpoint.code, endpoint.city)];
    if let Some(line) =
        terminal_gate_line(endpoint.terminal.as_deref(), endpoint.gate.as_deref())
    {
        lines.push(format!("       {line}"));
    }
    lines.push(format!(
        "       {}  {} {}",
        format_date(&endpoint.time),
        format_time(&endpoint.time),
        timezone_label(&endpoint.timezone)
    ));
    lines
}

/// Joins with a trailing newline after every line.
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
