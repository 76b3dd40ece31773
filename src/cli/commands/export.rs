use super::{load_calendar_events, resolve_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        view,
        offset,
        force,
        filter,
    } = cmd
    {
        let events = load_calendar_events(cfg, &filter.to_filter())?;
        let (anchor, mode) = resolve_view(date, view, *offset, cfg)?;
        let layout = Core::build_layout(&events, anchor, mode);
        ExportLogic::export(&layout, &events, *format, file, *force)?;
    }
    Ok(())
}
