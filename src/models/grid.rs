use super::calendar_date::CalendarDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_ROW: usize = 7;
pub const MONTH_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    #[default]
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ViewMode::Week => 1,
            ViewMode::Month => MONTH_ROWS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: CalendarDate,
    pub row_index: usize,
    pub col_index: usize,
}

/// Visible cells of a week or month view, Monday-first, rows of seven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGrid {
    pub mode: ViewMode,
    pub anchor: CalendarDate,
    pub cells: Vec<GridCell>,
}

impl DateGrid {
    pub fn row_count(&self) -> usize {
        self.cells.len() / DAYS_PER_ROW
    }

    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells.iter().map(|c| c.date)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(DAYS_PER_ROW)
    }

    pub fn row(&self, index: usize) -> Option<&[GridCell]> {
        self.cells.chunks(DAYS_PER_ROW).nth(index)
    }

    pub fn first_date(&self) -> Option<CalendarDate> {
        self.cells.first().map(|c| c.date)
    }

    pub fn last_date(&self) -> Option<CalendarDate> {
        self.cells.last().map(|c| c.date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.position(date).is_some()
    }

    /// `(row, col)` of `date`, if visible.
    pub fn position(&self, date: CalendarDate) -> Option<(usize, usize)> {
        let first = self.first_date()?;
        let offset = date.diff_days(first);
        if offset < 0 || offset as usize >= self.cells.len() {
            return None;
        }
        let cell = &self.cells[offset as usize];
        Some((cell.row_index, cell.col_index))
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= DAYS_PER_ROW {
            return None;
        }
        self.cells.get(row * DAYS_PER_ROW + col)
    }
}
