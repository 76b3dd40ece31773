use crate::errors::AppResult;
use crate::models::CalendarDate;

pub fn today() -> CalendarDate {
    CalendarDate::new(chrono::Local::now().date_naive())
}

/// Parse an optional CLI date, defaulting to today.
pub fn resolve_anchor(input: Option<&str>) -> AppResult<CalendarDate> {
    match input {
        Some(s) if s.eq_ignore_ascii_case("today") => Ok(today()),
        Some(s) => CalendarDate::parse(s),
        None => Ok(today()),
    }
}

pub fn weekday_short(index: usize) -> &'static str {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    NAMES.get(index).copied().unwrap_or("?")
}
