mod common;
use chrono::Weekday;
use common::d;
use rcalspan::core::layout::build_grid;
use rcalspan::core::navigation::{
    month_info, next_month, next_week, previous_month, previous_week, shift_anchor, week_info,
    week_title,
};
use rcalspan::models::ViewMode;

#[test]
fn test_week_grid_starts_on_monday() {
    let grid = build_grid(d("2025-01-01"), ViewMode::Week);

    assert_eq!(grid.cells.len(), 7);
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.first_date(), Some(d("2024-12-30")));
    assert_eq!(grid.last_date(), Some(d("2025-01-05")));
    for (col, cell) in grid.cells.iter().enumerate() {
        assert_eq!(cell.row_index, 0);
        assert_eq!(cell.col_index, col);
    }
}

#[test]
fn test_week_grid_same_for_every_day_of_the_week() {
    let monday = build_grid(d("2025-09-15"), ViewMode::Week);
    for day in ["2025-09-16", "2025-09-18", "2025-09-21"] {
        assert_eq!(
            build_grid(d(day), ViewMode::Week).cells,
            monday.cells,
            "anchor {day}"
        );
    }
    assert_eq!(monday.first_date(), Some(d("2025-09-15")));
}

#[test]
fn test_month_grids_always_have_42_contiguous_cells() {
    for year in 2024..=2026 {
        for month in 1..=12 {
            let anchor = d(&format!("{year}-{month:02}-10"));
            let grid = build_grid(anchor, ViewMode::Month);

            assert_eq!(grid.cells.len(), 42, "{anchor}");
            assert_eq!(grid.row_count(), 6);

            let first = grid.first_date().expect("non-empty");
            assert_eq!(first.weekday(), Weekday::Mon);
            assert!(first <= anchor.first_of_month());
            assert!(grid.contains(anchor.last_of_month()));

            for (i, cell) in grid.cells.iter().enumerate() {
                assert_eq!(cell.date, first.add_days(i as i64));
                assert_eq!((cell.row_index, cell.col_index), (i / 7, i % 7));
            }
        }
    }
}

#[test]
fn test_month_starting_on_monday() {
    // February 2021 begins on a Monday and has exactly four weeks
    let grid = build_grid(d("2021-02-20"), ViewMode::Month);
    assert_eq!(grid.first_date(), Some(d("2021-02-01")));
    assert_eq!(grid.last_date(), Some(d("2021-03-14")));
}

#[test]
fn test_position_lookup() {
    let grid = build_grid(d("2021-01-15"), ViewMode::Month);

    assert_eq!(grid.position(d("2020-12-28")), Some((0, 0)));
    assert_eq!(grid.position(d("2021-01-30")), Some((4, 5)));
    assert_eq!(grid.position(d("2021-02-07")), Some((5, 6)));
    assert_eq!(grid.position(d("2021-02-08")), None);
    assert_eq!(grid.position(d("2020-12-27")), None);

    let cell = grid.cell_at(4, 5).expect("in range");
    assert_eq!(cell.date, d("2021-01-30"));
    assert!(grid.cell_at(0, 7).is_none());
    assert!(grid.cell_at(6, 0).is_none());
}

#[test]
fn test_week_info_uses_iso_weeks() {
    let week = week_info(d("2025-01-01"));
    assert_eq!(week.week_key, "2025-01");
    assert_eq!(week.start, d("2024-12-30"));
    assert_eq!(week.end, d("2025-01-05"));
    assert_eq!(week.days.len(), 7);

    let last = week_info(d("2024-12-29"));
    assert_eq!(last.week_key, "2024-52");

    assert_eq!(next_week(&last), week);
    assert_eq!(previous_week(&week), last);
}

#[test]
fn test_week_title_formats() {
    assert_eq!(week_title(&week_info(d("2025-09-16"))), "2025-09-15 ~ 21");
    assert_eq!(week_title(&week_info(d("2025-10-01"))), "2025-09-29 ~ 10-05");
    assert_eq!(week_title(&week_info(d("2025-01-01"))), "2024-12-30 ~ 2025-01-05");
}

#[test]
fn test_month_info_and_paging() {
    let jan = month_info(d("2021-01-15"));
    assert_eq!(jan.month_key, "2021-01");
    assert_eq!(jan.start, d("2021-01-01"));
    assert_eq!(jan.end, d("2021-01-31"));
    assert_eq!(jan.calendar_start, d("2020-12-28"));
    assert_eq!(jan.calendar_end, d("2021-02-07"));
    assert!(jan.contains(d("2021-01-31")));
    assert!(!jan.contains(d("2021-02-01")));

    assert_eq!(previous_month(&jan).month_key, "2020-12");
    assert_eq!(next_month(&jan).month_key, "2021-02");
    assert_eq!(next_month(&month_info(d("2024-01-31"))).end, d("2024-02-29"));
}

#[test]
fn test_shift_anchor() {
    assert_eq!(shift_anchor(d("2025-01-01"), ViewMode::Week, 2), d("2025-01-15"));
    assert_eq!(shift_anchor(d("2025-01-01"), ViewMode::Week, -1), d("2024-12-25"));
    assert_eq!(shift_anchor(d("2025-01-31"), ViewMode::Month, 1), d("2025-02-28"));
    assert_eq!(shift_anchor(d("2025-01-15"), ViewMode::Month, -13), d("2023-12-15"));
    assert_eq!(shift_anchor(d("2025-01-15"), ViewMode::Month, 0), d("2025-01-15"));
}
