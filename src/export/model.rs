// src/export/model.rs

use crate::models::{CalendarEvent, Layout};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Flat, renderer-agnostic view of one segment.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SegmentExport {
    pub event_id: i64,
    pub kind: String,
    pub title: String,
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub start_date: String,
    pub end_date: String,
    pub lane: usize,
    pub total_days: i64,
    pub day_index: i64,
    pub starts_event: bool,
    pub ends_event: bool,
}

/// Whole-layout document written by the JSON exporter.
#[derive(Serialize, Clone, Debug)]
pub struct LayoutExport {
    pub view: String,
    pub anchor: String,
    pub first_date: String,
    pub last_date: String,
    pub lane_count: usize,
    pub row_heights: BTreeMap<usize, usize>,
    pub segments: Vec<SegmentExport>,
}

/// CSV header, same order as the `SegmentExport` fields
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "event_id",
        "kind",
        "title",
        "row",
        "start_col",
        "end_col",
        "start_date",
        "end_date",
        "lane",
        "total_days",
        "day_index",
        "starts_event",
        "ends_event",
    ]
}

pub(crate) fn segment_to_row(s: &SegmentExport) -> Vec<String> {
    vec![
        s.event_id.to_string(),
        s.kind.clone(),
        s.title.clone(),
        s.row.to_string(),
        s.start_col.to_string(),
        s.end_col.to_string(),
        s.start_date.clone(),
        s.end_date.clone(),
        s.lane.to_string(),
        s.total_days.to_string(),
        s.day_index.to_string(),
        s.starts_event.to_string(),
        s.ends_event.to_string(),
    ]
}

/// Flatten the layout's segments, resolving titles from `events`.
pub fn build_segment_exports(layout: &Layout, events: &[CalendarEvent]) -> Vec<SegmentExport> {
    let by_id: HashMap<i64, &CalendarEvent> = events.iter().map(|e| (e.id, e)).collect();

    layout
        .segments
        .iter()
        .map(|s| {
            let ev = by_id.get(&s.event_id);
            let date_at = |col: usize| {
                layout
                    .grid
                    .cell_at(s.row_index, col)
                    .map(|c| c.date.to_string())
                    .unwrap_or_default()
            };

            SegmentExport {
                event_id: s.event_id,
                kind: ev.map(|e| e.payload.kind.as_str().to_string()).unwrap_or_default(),
                title: ev.map(|e| e.payload.title.clone()).unwrap_or_default(),
                row: s.row_index,
                start_col: s.start_col,
                end_col: s.end_col,
                start_date: date_at(s.start_col),
                end_date: date_at(s.end_col),
                lane: s.lane_index,
                total_days: s.span_info.total_days,
                day_index: s.span_info.day_index,
                starts_event: s.starts_event,
                ends_event: s.ends_event,
            }
        })
        .collect()
}

pub fn build_layout_export(layout: &Layout, events: &[CalendarEvent]) -> LayoutExport {
    LayoutExport {
        view: layout.grid.mode.as_str().to_string(),
        anchor: layout.grid.anchor.to_string(),
        first_date: layout
            .grid
            .first_date()
            .map(|d| d.to_string())
            .unwrap_or_default(),
        last_date: layout
            .grid
            .last_date()
            .map(|d| d.to_string())
            .unwrap_or_default(),
        lane_count: layout.lanes.lane_count(),
        row_heights: layout.row_heights.iter().collect(),
        segments: build_segment_exports(layout, events),
    }
}
