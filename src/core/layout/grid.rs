use crate::models::grid::{DAYS_PER_ROW, DateGrid, GridCell, MONTH_ROWS, ViewMode};
use crate::models::CalendarDate;

/// Build the visible grid around `anchor`.
///
/// - week: Monday on/before the anchor through the following Sunday
/// - month: from the Monday on/before the 1st, always 6 rows (42 cells)
pub fn build_grid(anchor: CalendarDate, mode: ViewMode) -> DateGrid {
    let (first, rows) = match mode {
        ViewMode::Week => (anchor.monday_on_or_before(), 1),
        ViewMode::Month => (anchor.first_of_month().monday_on_or_before(), MONTH_ROWS),
    };

    let cells = (0..rows * DAYS_PER_ROW)
        .map(|i| GridCell {
            date: first.add_days(i as i64),
            row_index: i / DAYS_PER_ROW,
            col_index: i % DAYS_PER_ROW,
        })
        .collect();

    DateGrid {
        mode,
        anchor,
        cells,
    }
}

pub fn week_dates(anchor: CalendarDate) -> Vec<CalendarDate> {
    build_grid(anchor, ViewMode::Week).dates().collect()
}
