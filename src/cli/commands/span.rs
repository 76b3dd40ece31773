use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::display::span_label;
use crate::core::layout::span_info;
use crate::errors::{AppError, AppResult};
use crate::models::CalendarDate;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Span { date, start, end } = cmd {
        let d = CalendarDate::parse(date)?;
        let s = CalendarDate::parse(start)?;
        let e = CalendarDate::parse(end)?;

        if e < s {
            return Err(AppError::InvalidRange(format!("{end} is before {start}")));
        }

        match span_info(d, s, e) {
            Some(span) => {
                println!("date:       {d}");
                println!("total_days: {}", span.total_days);
                println!("day_index:  {}", span.day_index);
                println!("is_start:   {}", span.is_start);
                println!("is_middle:  {}", span.is_middle);
                println!("is_end:     {}", span.is_end);
                println!("label:      {}", span_label(&span, "event"));
            }
            None => info(format!("{d} is outside {s}..={e}")),
        }
    }
    Ok(())
}
