use crate::models::{CalendarDate, SpanInfo};

/// Inclusive length of `start..=end`, never below 1.
pub fn total_days(start: CalendarDate, end: CalendarDate) -> i64 {
    (end.diff_days(start) + 1).max(1)
}

/// Where `date` sits inside `start..=end`, or `None` when outside.
///
/// An inverted range is read as a single day at `start`.
pub fn span_info(date: CalendarDate, start: CalendarDate, end: CalendarDate) -> Option<SpanInfo> {
    let end = end.max(start);
    if date < start || date > end {
        return None;
    }

    let total_days = total_days(start, end);
    let day_index = date.diff_days(start);
    let is_start = day_index == 0;
    let is_end = day_index == total_days - 1;

    Some(SpanInfo {
        total_days,
        day_index,
        is_start,
        is_end,
        is_middle: !is_start && !is_end,
    })
}

/// Every date in `start..=end`, in order.
pub fn span_dates(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    let mut out = Vec::new();
    let mut d = start;
    let end = end.max(start);

    while d <= end {
        out.push(d);
        if d == end {
            break;
        }
        d = d.succ();
    }

    out
}
