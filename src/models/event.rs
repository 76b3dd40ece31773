use super::calendar_date::CalendarDate;
use super::event_kind::EventKind;
use serde::Serialize;

/// A whole-day event spanning `start..=end`.
///
/// `payload` is opaque to the layout engine and carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event<P = ()> {
    pub id: i64,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub payload: P,
}

impl<P> Event<P> {
    /// Build an event. An inverted range collapses to a single day at `start`.
    pub fn new(id: i64, start: CalendarDate, end: CalendarDate, payload: P) -> Self {
        let end = if end < start {
            tracing::warn!(id, %start, %end, "inverted event range, clamping to one day");
            start
        } else {
            end
        };

        Self {
            id,
            start,
            end,
            payload,
        }
    }

    /// End date as seen by the engine: never before `start`.
    pub fn effective_end(&self) -> CalendarDate {
        self.end.max(self.start)
    }

    pub fn total_days(&self) -> i64 {
        self.effective_end().diff_days(self.start) + 1
    }

    pub fn is_multi_day(&self) -> bool {
        self.total_days() > 1
    }

    pub fn covers(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.effective_end()
    }

    pub fn overlaps<Q>(&self, other: &Event<Q>) -> bool {
        self.start <= other.effective_end() && other.start <= self.effective_end()
    }

    pub fn intersects_range(&self, first: CalendarDate, last: CalendarDate) -> bool {
        self.start <= last && first <= self.effective_end()
    }
}

/// Payload attached by the domain adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventInfo {
    pub kind: EventKind,
    pub title: String,
    pub status: String,
}

impl EventInfo {
    pub fn new(kind: EventKind, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            status: status.into(),
        }
    }
}

/// Event as produced by the import adapters.
pub type CalendarEvent = Event<EventInfo>;
