use super::resolve_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::build_grid;
use crate::core::navigation::month_info;
use crate::errors::AppResult;
use crate::models::ViewMode;
use crate::ui::calendar::{RenderOptions, render_grid, view_title};
use crate::ui::messages::header;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { date, view, offset } = cmd {
        let (anchor, mode) = resolve_view(date, view, *offset, cfg)?;
        let grid = build_grid(anchor, mode);
        let month = (mode == ViewMode::Month).then(|| month_info(anchor));

        header(view_title(mode, anchor));
        let opts = RenderOptions::from_config(cfg, Some(today()));
        print!("{}", render_grid(&grid, month.as_ref(), &opts));
    }
    Ok(())
}
