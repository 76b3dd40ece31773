//! Week and month navigation around the visible grid.

use crate::core::layout::grid::{build_grid, week_dates};
use crate::models::{CalendarDate, ViewMode};
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekInfo {
    /// ISO week-numbering year
    pub year: i32,
    pub week_number: u32,
    /// `YYYY-WW`
    pub week_key: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: Vec<CalendarDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthInfo {
    pub year: i32,
    pub month: u32,
    /// `YYYY-MM`
    pub month_key: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
    /// First visible cell (may belong to the previous month)
    pub calendar_start: CalendarDate,
    /// Last visible cell (may belong to the next month)
    pub calendar_end: CalendarDate,
}

pub fn week_info(date: CalendarDate) -> WeekInfo {
    let iso = date.naive().iso_week();
    let days = week_dates(date);
    let start = date.monday_on_or_before();

    WeekInfo {
        year: iso.year(),
        week_number: iso.week(),
        week_key: format!("{}-{:02}", iso.year(), iso.week()),
        start,
        end: start.add_days(6),
        days,
    }
}

pub fn previous_week(current: &WeekInfo) -> WeekInfo {
    week_info(current.start.add_days(-7))
}

pub fn next_week(current: &WeekInfo) -> WeekInfo {
    week_info(current.start.add_days(7))
}

/// `2025-09-16 ~ 22` within one month, `2025-09-29 ~ 10-05` across two.
pub fn week_title(week: &WeekInfo) -> String {
    if week.start.month() == week.end.month() {
        format!("{} ~ {:02}", week.start, week.end.day())
    } else if week.start.year() == week.end.year() {
        format!("{} ~ {}", week.start, week.end.format("%m-%d"))
    } else {
        format!("{} ~ {}", week.start, week.end)
    }
}

pub fn month_info(date: CalendarDate) -> MonthInfo {
    let grid = build_grid(date, ViewMode::Month);
    let start = date.first_of_month();

    MonthInfo {
        year: start.year(),
        month: start.month(),
        month_key: format!("{}-{:02}", start.year(), start.month()),
        start,
        end: date.last_of_month(),
        calendar_start: grid.first_date().unwrap_or(start),
        calendar_end: grid.last_date().unwrap_or(start),
    }
}

pub fn previous_month(current: &MonthInfo) -> MonthInfo {
    month_info(current.start.add_months(-1))
}

pub fn next_month(current: &MonthInfo) -> MonthInfo {
    month_info(current.start.add_months(1))
}

impl MonthInfo {
    /// True for days of this month, false for padding cells.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Move `anchor` by whole weeks or months depending on `mode`.
pub fn shift_anchor(anchor: CalendarDate, mode: ViewMode, offset: i32) -> CalendarDate {
    match mode {
        ViewMode::Week => anchor.add_days(7 * offset as i64),
        ViewMode::Month => anchor.add_months(offset),
    }
}
