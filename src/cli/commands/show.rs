use super::{load_calendar_events, resolve_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::core::navigation::month_info;
use crate::errors::AppResult;
use crate::models::ViewMode;
use crate::ui::calendar::{RenderOptions, render_layout, view_title};
use crate::ui::messages::header;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        date,
        view,
        offset,
        filter,
    } = cmd
    {
        let events = load_calendar_events(cfg, &filter.to_filter())?;
        let (anchor, mode) = resolve_view(date, view, *offset, cfg)?;
        let layout = Core::build_layout(&events, anchor, mode);
        let month = (mode == ViewMode::Month).then(|| month_info(anchor));

        header(view_title(mode, anchor));
        let opts = RenderOptions::from_config(cfg, Some(today()));
        print!("{}", render_layout(&layout, &events, month.as_ref(), &opts));

        let metrics = cfg.metrics();
        for r in 0..layout.grid.row_count() {
            tracing::debug!(
                row = r,
                lanes = layout.row_heights.lanes_in_row(r),
                height_px = layout.row_heights.pixel_height(r, &metrics),
                "row height"
            );
        }
    }
    Ok(())
}
