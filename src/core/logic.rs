use crate::core::layout::{assign_lanes, build_grid, clip_events, resolve_row_heights};
use crate::models::{CalendarDate, Event, Layout, ViewMode};

pub struct Core;

impl Core {
    /// Lay out `events` on the week/month grid around `anchor`.
    ///
    /// Lanes are assigned over the whole event set, not per row, so lane
    /// numbers stay stable while the user pages through weeks or months.
    #[tracing::instrument(skip(events), fields(events = events.len()))]
    pub fn build_layout<P>(events: &[Event<P>], anchor: CalendarDate, mode: ViewMode) -> Layout {
        let grid = build_grid(anchor, mode);
        let lanes = assign_lanes(events);
        let segments = clip_events(events, &lanes, &grid);
        let row_heights = resolve_row_heights(&segments);

        tracing::debug!(
            segments = segments.len(),
            lanes = lanes.lane_count(),
            "layout built"
        );

        Layout {
            grid,
            lanes,
            segments,
            row_heights,
        }
    }

    /// Events intersecting the visible grid.
    pub fn visible_events<'a, P>(events: &'a [Event<P>], layout: &Layout) -> Vec<&'a Event<P>> {
        match (layout.grid.first_date(), layout.grid.last_date()) {
            (Some(first), Some(last)) => events
                .iter()
                .filter(|ev| ev.intersects_range(first, last))
                .collect(),
            _ => Vec::new(),
        }
    }
}
