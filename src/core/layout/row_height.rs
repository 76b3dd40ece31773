use crate::models::{RowHeights, Segment};
use std::collections::BTreeMap;

/// Highest lane index per row among `segments`.
pub fn resolve_row_heights(segments: &[Segment]) -> RowHeights {
    let mut rows: BTreeMap<usize, usize> = BTreeMap::new();
    for seg in segments {
        rows.entry(seg.row_index)
            .and_modify(|max| *max = (*max).max(seg.lane_index))
            .or_insert(seg.lane_index);
    }
    RowHeights::from_map(rows)
}
