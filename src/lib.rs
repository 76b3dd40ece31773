//! rCalSpan library root.
//! Exposes the multi-day layout engine, the CLI parser, the high-level
//! run() function and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, cfg),
        Commands::Span { .. } => cli::commands::span::handle(&cli.command, cfg),
        Commands::Lanes { .. } => cli::commands::lanes::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
#[tracing::instrument(skip_all)]
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging
    cli::init_tracing(cli.verbose, cli.quiet)?;
    tracing::info!(verbose = cli.verbose, quiet = cli.quiet, "starting rcalspan");

    // 3️⃣ load config ONCE
    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    // 4️⃣ command-line overrides
    if let Some(events) = &cli.events {
        cfg.events_file = events.clone();
    }
    if cli.no_color {
        cfg.color = false;
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
