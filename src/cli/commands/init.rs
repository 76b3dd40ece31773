use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(Path::new);
    let path = Config::init_all(custom, cli.test)?;

    if cli.test {
        info(format!("Test mode: {} not written", path.display()));
        return Ok(());
    }

    success(format!("Config file: {}", path.display()));
    info(format!(
        "Events are read from: {}",
        Config::load(Some(path.as_path()))?.events_file
    ));
    Ok(())
}
