use serde::Serialize;

/// Position of one date inside an event's inclusive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanInfo {
    pub total_days: i64,
    pub day_index: i64,
    pub is_start: bool,
    pub is_end: bool,
    pub is_middle: bool,
}

/// Coarse phase of a day inside a span, used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpanPhase {
    Start,
    Middle,
    End,
}

impl SpanInfo {
    pub fn is_single_day(&self) -> bool {
        self.total_days == 1
    }

    /// One-based "day k of N" counter.
    pub fn day_number(&self) -> i64 {
        self.day_index + 1
    }

    pub fn phase(&self) -> SpanPhase {
        if self.is_start {
            SpanPhase::Start
        } else if self.is_middle {
            SpanPhase::Middle
        } else {
            SpanPhase::End
        }
    }
}
