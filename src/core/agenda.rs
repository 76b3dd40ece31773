//! Per-day view of the events touching a date.

use crate::core::layout::span_info;
use crate::models::{CalendarDate, CalendarEvent, DateGrid, Event, EventKind, SpanInfo};

#[derive(Debug, Clone)]
pub struct DayEntry<'a> {
    pub event: &'a CalendarEvent,
    pub span: SpanInfo,
}

/// Events covering `date`, in display order:
/// demos before orders, then start < middle < end, then id.
///
/// One-day events always sit in the start phase, so the phase only
/// separates days of multi-day demos.
pub fn events_on(events: &[CalendarEvent], date: CalendarDate) -> Vec<DayEntry<'_>> {
    let mut entries: Vec<DayEntry<'_>> = events
        .iter()
        .filter_map(|event| {
            span_info(date, event.start, event.effective_end()).map(|span| DayEntry { event, span })
        })
        .collect();

    entries.sort_by_key(|e| {
        (
            e.event.payload.kind != EventKind::Demo,
            e.span.phase(),
            e.event.id,
        )
    });
    entries
}

/// Busiest visible day, as an event count.
pub fn max_events_per_day<P>(events: &[Event<P>], grid: &DateGrid) -> usize {
    grid.dates()
        .map(|d| events.iter().filter(|ev| ev.covers(d)).count())
        .max()
        .unwrap_or(0)
}
