//! Pure day queries over the event list.
//!
//! Queries work in calendar days: an event belongs to a day when the
//! day falls between the calendar dates of its start and end instants,
//! so multi-day events appear on every covered day. Results are sorted
//! by start instant, stable on ties.

use chrono::NaiveDate;

use crate::types::CalendarEvent;

/// The events covering one calendar day, sorted by start
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    let mut hits: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| e.start.date_naive() <= date && e.end.date_naive() >= date)
        .cloned()
        .collect();
    hits.sort_by_key(|e| e.start);
    hits
}

/// The events overlapping the inclusive day range `from..=to`, sorted by
/// start. Used for month and week views.
pub fn events_between(
    events: &[CalendarEvent],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut hits: Vec<CalendarEvent> = events
        .iter()
        .filter(|e| e.start.date_naive() <= to && e.end.date_naive() >= from)
        .cloned()
        .collect();
    hits.sort_by_key(|e| e.start);
    hits
}
