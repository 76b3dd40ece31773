//! Turns raw order/demo records into engine events.
//!
//! Everything the engine assumes (dates present, `start <= end`, unique ids)
//! is enforced here; offending records are skipped, not repaired.

use super::record::{SourceRecord, present};
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarDate, CalendarEvent, Event, EventInfo, EventKind};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDate,
    InvalidDate(String),
    InvertedRange {
        start: CalendarDate,
        end: CalendarDate,
    },
    DuplicateId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDate => write!(f, "missing date"),
            SkipReason::InvalidDate(raw) => write!(f, "invalid date '{raw}'"),
            SkipReason::InvertedRange { start, end } => {
                write!(f, "end {end} before start {start}")
            }
            SkipReason::DuplicateId => write!(f, "duplicate id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub id: i64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub events: Vec<CalendarEvent>,
    pub skipped: Vec<Skipped>,
}

/// Counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    pub total: usize,
    pub orders: usize,
    pub demos: usize,
}

impl EventStats {
    pub fn of(events: &[CalendarEvent]) -> Self {
        let orders = events
            .iter()
            .filter(|e| e.payload.kind == EventKind::Order)
            .count();
        Self {
            total: events.len(),
            orders,
            demos: events.len() - orders,
        }
    }
}

fn parse_field(raw: &str) -> Result<CalendarDate, SkipReason> {
    CalendarDate::parse(raw).map_err(|_| SkipReason::InvalidDate(raw.to_string()))
}

/// Calendar range of one record.
///
/// Orders are single-day at their installation date; demos span
/// start..=end, or one day when the end is missing.
fn record_range(
    kind: EventKind,
    rec: &SourceRecord,
) -> Result<(CalendarDate, CalendarDate), SkipReason> {
    match kind {
        EventKind::Order => {
            let raw = present(&rec.installation_date).ok_or(SkipReason::MissingDate)?;
            let date = parse_field(raw)?;
            Ok((date, date))
        }
        EventKind::Demo => {
            let raw_start = present(&rec.demo_start_date).ok_or(SkipReason::MissingDate)?;
            let start = parse_field(raw_start)?;
            let end = match present(&rec.demo_end_date) {
                Some(raw_end) => parse_field(raw_end)?,
                None => start,
            };
            if end < start {
                return Err(SkipReason::InvertedRange { start, end });
            }
            Ok((start, end))
        }
    }
}

pub fn adapt_records(records: Vec<SourceRecord>) -> AppResult<ImportReport> {
    let mut report = ImportReport::default();
    let mut seen = HashSet::new();

    for rec in records {
        let kind = EventKind::from_code(&rec.kind)
            .ok_or_else(|| AppError::InvalidEventKind(format!("{} (id {})", rec.kind, rec.id)))?;

        let range = if seen.contains(&rec.id) {
            Err(SkipReason::DuplicateId)
        } else {
            record_range(kind, &rec)
        };

        match range {
            Ok((start, end)) => {
                seen.insert(rec.id);
                let title = present(&rec.title)
                    .map(str::to_string)
                    .unwrap_or_else(|| kind.default_title(rec.id));
                let status = present(&rec.status).unwrap_or("unknown").to_string();

                report
                    .events
                    .push(Event::new(rec.id, start, end, EventInfo::new(kind, title, status)));
            }
            Err(reason) => {
                tracing::warn!(id = rec.id, kind = kind.as_str(), %reason, "skipping record");
                report.skipped.push(Skipped { id: rec.id, reason });
            }
        }
    }

    tracing::debug!(
        imported = report.events.len(),
        skipped = report.skipped.len(),
        "records adapted"
    );
    Ok(report)
}
