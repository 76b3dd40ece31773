use super::lanes::unique_by_id;
use super::span::span_info;
use crate::models::{DateGrid, Event, LaneAssignment, Segment};

/// Split one event into per-row segments of `grid`.
///
/// Columns are clipped to each row; span metadata is computed against the
/// whole event so a fragment can still report "day 5 of 9".
pub fn clip_event<P>(event: &Event<P>, lane_index: usize, grid: &DateGrid) -> Vec<Segment> {
    let start = event.start;
    let end = event.effective_end();
    let mut out = Vec::new();

    for row in grid.rows() {
        let (Some(first), Some(last)) = (row.first(), row.last()) else {
            continue;
        };

        let lo = start.max(first.date);
        let hi = end.min(last.date);
        if lo > hi {
            continue;
        }

        let Some(info) = span_info(lo, start, end) else {
            continue;
        };

        out.push(Segment {
            event_id: event.id,
            row_index: first.row_index,
            start_col: lo.diff_days(first.date) as usize,
            end_col: hi.diff_days(first.date) as usize,
            lane_index,
            span_info: info,
            starts_event: lo == start,
            ends_event: hi == end,
        });
    }

    out
}

/// Clip every event that has a lane, in `(row, lane, start_col)` order.
///
/// As in lane assignment, only the first event of each id is clipped.
pub fn clip_events<P>(
    events: &[Event<P>],
    lanes: &LaneAssignment,
    grid: &DateGrid,
) -> Vec<Segment> {
    let mut segments: Vec<Segment> = unique_by_id(events)
        .into_iter()
        .filter_map(|ev| match lanes.get(ev.id) {
            Some(lane) => Some(clip_event(ev, lane, grid)),
            None => {
                tracing::warn!(id = ev.id, "event has no lane, skipping");
                None
            }
        })
        .flatten()
        .collect();

    segments.sort_by_key(|s| (s.row_index, s.lane_index, s.start_col, s.event_id));
    segments
}
