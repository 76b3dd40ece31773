//! Narrowing the loaded events by kind, status and free text.

use crate::models::{CalendarEvent, EventKind};

/// Selection applied after import and before lane assignment.
///
/// Empty `kinds`/`statuses` and a blank `search` select everything; when
/// several parts are set an event must match all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub kinds: Vec<EventKind>,
    pub statuses: Vec<String>,
    pub search: Option<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.statuses.is_empty() && search_text(&self.search).is_none()
    }

    pub fn matches(&self, event: &CalendarEvent) -> bool {
        matches_kind(event, &self.kinds)
            && matches_status(event, &self.statuses)
            && search_text(&self.search).is_none_or(|text| matches_text(event, text))
    }

    pub fn apply(&self, events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
        if self.is_empty() {
            return events;
        }

        let before = events.len();
        let kept: Vec<CalendarEvent> = events.into_iter().filter(|e| self.matches(e)).collect();
        tracing::debug!(before, after = kept.len(), filter = ?self, "events filtered");
        kept
    }
}

fn search_text(search: &Option<String>) -> Option<&str> {
    search.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn matches_kind(event: &CalendarEvent, kinds: &[EventKind]) -> bool {
    kinds.is_empty() || kinds.contains(&event.payload.kind)
}

/// Exact status match, ignoring case.
pub fn matches_status(event: &CalendarEvent, statuses: &[String]) -> bool {
    statuses.is_empty()
        || statuses
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(&event.payload.status))
}

/// Case-insensitive substring of the title or the status.
pub fn matches_text(event: &CalendarEvent, text: &str) -> bool {
    let needle = text.trim().to_lowercase();
    needle.is_empty()
        || event.payload.title.to_lowercase().contains(&needle)
        || event.payload.status.to_lowercase().contains(&needle)
}
