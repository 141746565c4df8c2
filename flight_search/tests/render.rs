mod support;

use flight_search::render::{StatusBadge, banner, render_card};
use support::flight;

#[test]
fn card_shows_route_times_and_duration() {
    let card = render_card(&flight("UA123", "Landed", 0));

    assert_eq!(
        card,
        "United Airlines UA123  [! Landed ]\n\
         \x20 From JFK  John F Kennedy International\n\
         \x20      Term 4 • Gate B22\n\
         \x20      Mon, Jan 1  10:00 AM New York\n\
         \x20 To   LAX  Los Angeles International\n\
         \x20      Mon, Jan 1  01:45 PM Los Angeles\n\
         \x20 Duration: 3h 45m\n\n"
    );
}

#[test]
fn only_literal_on_time_gets_on_time_badge() {
    assert_eq!(
        StatusBadge::for_flight(&flight("UA1", "On Time", 0)),
        StatusBadge::OnTime
    );
    assert_eq!(
        StatusBadge::for_flight(&flight("UA1", "ON TIME", 0)),
        StatusBadge::Delayed
    );
    assert!(render_card(&flight("UA1", "On Time", 0)).contains("[ On Time ]"));
}

#[test]
fn terminal_line_omitted_when_both_missing() {
    let mut f = flight("UA123", "Scheduled", 0);
    f.origin.terminal = None;
    f.origin.gate = None;

    let card = render_card(&f);

    assert!(!card.contains("Term"));
    assert!(!card.contains("Gate"));
}

#[test]
fn gate_alone_has_no_separator() {
    let mut f = flight("UA123", "Scheduled", 0);
    f.origin.terminal = None;

    let card = render_card(&f);

    assert!(card.contains("       Gate B22\n"));
    assert!(!card.contains('•'));
}

#[test]
fn empty_terminal_and_gate_render_no_line() {
    let mut f = flight("UA123", "Scheduled", 0);
    f.origin.terminal = Some(String::new());
    f.origin.gate = Some(String::new());

    let card = render_card(&f);

    assert!(!card.contains("Term"));
    assert!(!card.contains("Gate"));
}

#[test]
fn banner_has_title_and_tagline() {
    assert_eq!(
        banner(),
        "Funcode Flight Tracker\nReal-time flight status and information\n"
    );
}
