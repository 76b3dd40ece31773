use super::load_calendar_events;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::agenda::events_on;
use crate::core::display::span_label;
use crate::errors::AppResult;
use crate::utils::date::resolve_anchor;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, filter } = cmd {
        let d = resolve_anchor(date.as_deref())?;
        let events = load_calendar_events(cfg, &filter.to_filter())?;
        let entries = events_on(&events, d);

        if entries.is_empty() {
            println!("No events for {}", d);
            return Ok(());
        }

        println!("\n=== {} ({}) ===", d, d.format("%A"));

        let mut table = Table::with_headers(&["ID", "KIND", "STATUS", "EVENT"]);
        for e in &entries {
            table.add_row(vec![
                e.event.id.to_string(),
                e.event.payload.kind.as_str().to_string(),
                e.event.payload.status.clone(),
                span_label(&e.span, &e.event.payload.title),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
