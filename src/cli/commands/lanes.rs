use super::{load_calendar_events, resolve_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lanes {
        date,
        view,
        all,
        filter,
    } = cmd
    {
        let events = load_calendar_events(cfg, &filter.to_filter())?;
        let (anchor, mode) = resolve_view(date, view, 0, cfg)?;
        let layout = Core::build_layout(&events, anchor, mode);

        let shown: Vec<_> = if *all {
            events.iter().collect()
        } else {
            Core::visible_events(&events, &layout)
        };

        if shown.is_empty() {
            info("No events to show.");
            return Ok(());
        }

        header(format!("Lanes ({} in use)", layout.lanes.lane_count()));

        let mut table =
            Table::with_headers(&["ID", "KIND", "TITLE", "START", "END", "DAYS", "LANE"]);
        let mut rows: Vec<_> = shown
            .iter()
            .map(|ev| (layout.lanes.get(ev.id).unwrap_or(0), ev.start, ev.id, *ev))
            .collect();
        rows.sort_by_key(|(lane, start, id, _)| (*lane, *start, *id));

        for (lane, _, _, ev) in rows {
            table.add_row(vec![
                ev.id.to_string(),
                ev.payload.kind.as_str().to_string(),
                ev.payload.title.clone(),
                ev.start.to_string(),
                ev.effective_end().to_string(),
                ev.total_days().to_string(),
                lane.to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
