//! Plain-terminal rendering of a computed layout.
//!
//! Each grid row prints a date header followed by one line per lane; a
//! segment becomes a coloured bar across the columns it covers.

use crate::config::Config;
use crate::core::display::{should_show_title, span_label};
use crate::core::navigation::MonthInfo;
use crate::models::grid::DAYS_PER_ROW;
use crate::models::{CalendarDate, CalendarEvent, DateGrid, GridCell, Layout, Segment, ViewMode};
use crate::utils::colors::{self, bar_style, paint};
use crate::utils::date::weekday_short;
use crate::utils::formatting::{pad_right, truncate_to_width};
use std::collections::HashMap;

const SEP: char = '│';

pub struct RenderOptions {
    pub cell_width: usize,
    pub max_visible_lanes: usize,
    pub color: bool,
    pub today: Option<CalendarDate>,
}

impl RenderOptions {
    pub fn from_config(cfg: &Config, today: Option<CalendarDate>) -> Self {
        Self {
            cell_width: cfg.cell_width,
            max_visible_lanes: cfg.max_visible_lanes,
            color: cfg.color,
            today,
        }
    }
}

fn weekday_header(cw: usize) -> String {
    let mut line = String::from(SEP);
    for col in 0..DAYS_PER_ROW {
        line.push_str(&pad_right(weekday_short(col), cw));
        line.push(SEP);
    }
    line
}

fn date_header(row: &[GridCell], month: Option<&MonthInfo>, opts: &RenderOptions) -> String {
    let cw = opts.cell_width;
    let mut line = String::from(SEP);

    for cell in row {
        let text = pad_right(&truncate_to_width(&cell.date.format("%m-%d"), cw), cw);
        let style = if opts.today == Some(cell.date) {
            colors::today()
        } else if month.is_some_and(|m| !m.contains(cell.date)) {
            colors::dim()
        } else if cell.date.is_weekend() {
            colors::weekend()
        } else {
            ansi_term::Style::new()
        };
        line.push_str(&paint(opts.color, style, &text));
        line.push(SEP);
    }

    line
}

fn bar(seg: &Segment, ev: Option<&CalendarEvent>, opts: &RenderOptions) -> String {
    let width = seg.width() * opts.cell_width + seg.width() - 1;

    let title = ev.map_or_else(|| format!("#{}", seg.event_id), |e| e.payload.title.clone());
    let label = if should_show_title(Some(&seg.span_info), seg.start_col) {
        span_label(&seg.span_info, &title)
    } else {
        String::new()
    };
    let left = if seg.starts_event { "" } else { "◀" };
    let right = if seg.ends_event { "" } else { "▶" };

    // the right marker stays visible even when the label is cut
    let room = width.saturating_sub(right.chars().count());
    let body = truncate_to_width(&format!("{left}{label}"), room);
    let text = format!("{}{}", pad_right(&body, room), right);

    match ev {
        Some(e) => paint(opts.color, bar_style(e.payload.kind, seg.lane_index), &text),
        None => text,
    }
}

fn lane_line(
    segments: &[&Segment],
    by_id: &HashMap<i64, &CalendarEvent>,
    opts: &RenderOptions,
) -> String {
    let mut line = String::from(SEP);
    let mut col = 0;

    while col < DAYS_PER_ROW {
        match segments.iter().find(|s| s.start_col == col) {
            Some(seg) => {
                line.push_str(&bar(seg, by_id.get(&seg.event_id).copied(), opts));
                col = seg.end_col + 1;
            }
            None => {
                line.push_str(&" ".repeat(opts.cell_width));
                col += 1;
            }
        }
        line.push(SEP);
    }

    line
}

/// Render the whole layout, one block per grid row.
pub fn render_layout(
    layout: &Layout,
    events: &[CalendarEvent],
    month: Option<&MonthInfo>,
    opts: &RenderOptions,
) -> String {
    let by_id: HashMap<i64, &CalendarEvent> = events.iter().map(|e| (e.id, e)).collect();
    let mut out = String::new();

    out.push_str(&weekday_header(opts.cell_width));
    out.push('\n');

    for (r, row) in layout.grid.rows().enumerate() {
        out.push_str(&date_header(row, month, opts));
        out.push('\n');

        let lanes = layout.row_heights.lanes_in_row(r);
        let visible = lanes.min(opts.max_visible_lanes);

        for lane in 0..visible {
            let in_lane: Vec<&Segment> = layout
                .segments_in_row(r)
                .filter(|s| s.lane_index == lane)
                .collect();
            out.push_str(&lane_line(&in_lane, &by_id, opts));
            out.push('\n');
        }

        let hidden = lanes - visible;
        if hidden > 0 {
            out.push_str(&format!("  +{hidden} more\n"));
        }
        if lanes == 0 {
            out.push_str(&lane_line(&[], &by_id, opts));
            out.push('\n');
        }
    }

    out
}

/// Render just the dates of a grid, no events.
pub fn render_grid(grid: &DateGrid, month: Option<&MonthInfo>, opts: &RenderOptions) -> String {
    let mut out = weekday_header(opts.cell_width);
    out.push('\n');
    for row in grid.rows() {
        out.push_str(&date_header(row, month, opts));
        out.push('\n');
    }
    out
}

/// Title line for a view: month key or week range.
pub fn view_title(mode: ViewMode, anchor: CalendarDate) -> String {
    use crate::core::navigation::{month_info, week_info, week_title};

    match mode {
        ViewMode::Month => month_info(anchor).month_key,
        ViewMode::Week => {
            let w = week_info(anchor);
            format!("{} (week {})", week_title(&w), w.week_key)
        }
    }
}
