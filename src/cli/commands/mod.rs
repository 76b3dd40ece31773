pub mod config;
pub mod day;
pub mod export;
pub mod grid;
pub mod init;
pub mod lanes;
pub mod show;
pub mod span;

use crate::config::Config;
use crate::core::filter::EventFilter;
use crate::core::navigation::shift_anchor;
use crate::errors::AppResult;
use crate::import::{EventStats, load_events};
use crate::models::{CalendarDate, CalendarEvent, ViewMode};
use crate::ui::messages::warning;
use crate::utils::date::resolve_anchor;
use crate::utils::path::expand_tilde;

/// Load the configured events source, reporting skipped records, and keep
/// the events selected by `filter`.
pub(crate) fn load_calendar_events(
    cfg: &Config,
    filter: &EventFilter,
) -> AppResult<Vec<CalendarEvent>> {
    let path = expand_tilde(&cfg.events_file);
    let report = load_events(&path)?;

    for s in &report.skipped {
        warning(format!("Skipped record {}: {}", s.id, s.reason));
    }

    let stats = EventStats::of(&report.events);
    tracing::info!(
        total = stats.total,
        orders = stats.orders,
        demos = stats.demos,
        "events loaded"
    );
    Ok(filter.apply(report.events))
}

/// Anchor date and mode for a grid command.
pub(crate) fn resolve_view(
    date: &Option<String>,
    view: &Option<ViewMode>,
    offset: i32,
    cfg: &Config,
) -> AppResult<(CalendarDate, ViewMode)> {
    let mode = view.unwrap_or(cfg.default_view);
    let anchor = resolve_anchor(date.as_deref())?;
    Ok((shift_anchor(anchor, mode, offset), mode))
}
