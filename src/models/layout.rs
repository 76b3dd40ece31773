use super::grid::DateGrid;
use super::segment::Segment;
use serde::Serialize;
use std::collections::BTreeMap;

/// `event id -> lane index` for one event set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    lanes: BTreeMap<i64, usize>,
    lane_count: usize,
}

impl LaneAssignment {
    pub(crate) fn from_parts(lanes: BTreeMap<i64, usize>, lane_count: usize) -> Self {
        Self { lanes, lane_count }
    }

    pub fn get(&self, event_id: i64) -> Option<usize> {
        self.lanes.get(&event_id).copied()
    }

    /// Number of distinct lanes in use.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.lanes.iter().map(|(id, lane)| (*id, *lane))
    }
}

/// Pixel geometry used to turn lane counts into row heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    pub base_row_height: u32,
    pub lane_height: u32,
    pub max_visible_lanes: usize,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            base_row_height: 120,
            lane_height: 36,
            max_visible_lanes: 4,
        }
    }
}

/// `row index -> highest lane index used in that row`. Empty rows are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RowHeights(BTreeMap<usize, usize>);

impl RowHeights {
    pub(crate) fn from_map(map: BTreeMap<usize, usize>) -> Self {
        Self(map)
    }

    pub fn max_lane(&self, row: usize) -> Option<usize> {
        self.0.get(&row).copied()
    }

    /// Lanes to reserve in `row` (0 when the row is empty).
    pub fn lanes_in_row(&self, row: usize) -> usize {
        self.max_lane(row).map_or(0, |lane| lane + 1)
    }

    pub fn hidden_lanes(&self, row: usize, metrics: &RowMetrics) -> usize {
        self.lanes_in_row(row).saturating_sub(metrics.max_visible_lanes)
    }

    pub fn pixel_height(&self, row: usize, metrics: &RowMetrics) -> u32 {
        let visible = self.lanes_in_row(row).min(metrics.max_visible_lanes) as u32;
        metrics.base_row_height + visible * metrics.lane_height
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(row, lane)| (*row, *lane))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything a renderer needs for one visible grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub grid: DateGrid,
    pub lanes: LaneAssignment,
    pub segments: Vec<Segment>,
    pub row_heights: RowHeights,
}

impl Layout {
    pub fn segments_in_row(&self, row: usize) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.row_index == row)
    }

    pub fn segments_for_event(&self, event_id: i64) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.event_id == event_id)
    }
}
