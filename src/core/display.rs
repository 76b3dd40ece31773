use crate::models::SpanInfo;

/// Whether a day cell should print the event title.
///
/// One-day events and the first day always do; later days only when they
/// open a new week row (column 0), so continuations stay readable.
pub fn should_show_title(span: Option<&SpanInfo>, col: usize) -> bool {
    match span {
        None => true,
        Some(s) if s.is_single_day() || s.is_start => true,
        Some(_) => col == 0,
    }
}

/// Short label for one day of a (possibly multi-day) event.
pub fn span_label(span: &SpanInfo, title: &str) -> String {
    if span.is_single_day() {
        return title.to_string();
    }

    if span.is_start {
        format!("{title} ({} days)", span.total_days)
    } else if span.is_end {
        format!("{title} (done)")
    } else {
        format!("{title} (day {}/{})", span.day_number(), span.total_days)
    }
}
