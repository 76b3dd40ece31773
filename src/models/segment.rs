use super::span_info::SpanInfo;
use serde::Serialize;

/// The part of an event that falls inside one grid row.
///
/// `span_info` describes the segment's first visible day against the whole,
/// unclipped event. `starts_event`/`ends_event` are true only when the
/// segment contains the event's real first/last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub event_id: i64,
    pub row_index: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub lane_index: usize,
    pub span_info: SpanInfo,
    pub starts_event: bool,
    pub ends_event: bool,
}

impl Segment {
    /// Number of visible columns.
    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Continues from the previous row.
    pub fn is_continuation(&self) -> bool {
        !self.starts_event
    }
}
