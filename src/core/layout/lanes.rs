use crate::models::{CalendarDate, Event, LaneAssignment};
use std::collections::{BTreeMap, HashSet};

/// Assign every event a lane so that no two overlapping events share one.
///
/// Greedy interval partitioning: events are visited by `(start, id)` and
/// take the first lane whose last end date is strictly before their start.
/// The lane count equals the deepest overlap of the input, and the `id`
/// tie-break makes the result independent of input order. Only the first
/// event of each id takes part.
pub fn assign_lanes<P>(events: &[Event<P>]) -> LaneAssignment {
    let mut order: Vec<&Event<P>> = unique_by_id(events);
    order.sort_by_key(|e| (e.start, e.id));

    // lane index -> end date of the last event placed there
    let mut lane_ends: Vec<CalendarDate> = Vec::new();
    let mut assigned = BTreeMap::new();

    for ev in order {
        let end = ev.effective_end();
        let lane = match lane_ends.iter().position(|last_end| *last_end < ev.start) {
            Some(free) => {
                lane_ends[free] = lane_ends[free].max(end);
                free
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };
        assigned.insert(ev.id, lane);
    }

    tracing::debug!(
        events = events.len(),
        lanes = lane_ends.len(),
        "lane assignment computed"
    );

    LaneAssignment::from_parts(assigned, lane_ends.len())
}

/// First event of every id, in input order. Later events reusing an id are dropped.
pub(crate) fn unique_by_id<P>(events: &[Event<P>]) -> Vec<&Event<P>> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|ev| {
            let first = seen.insert(ev.id);
            if !first {
                tracing::warn!(id = ev.id, start = %ev.start, "duplicate event id, dropping");
            }
            first
        })
        .collect()
}

/// Largest number of events covering one single date.
pub fn max_overlap_depth<P>(events: &[Event<P>]) -> usize {
    // +1 at start, -1 the day after end; ties resolve closings first
    let mut edges: Vec<(CalendarDate, i32)> = Vec::with_capacity(events.len() * 2);
    for ev in events {
        edges.push((ev.start, 1));
        edges.push((ev.effective_end().succ(), -1));
    }
    edges.sort();

    let mut depth = 0i32;
    let mut max = 0i32;
    for (_, delta) in edges {
        depth += delta;
        max = max.max(depth);
    }
    max as usize
}
