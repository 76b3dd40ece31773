use crate::core::filter::EventFilter;
use crate::export::ExportFormat;
use crate::models::{EventKind, ViewMode};
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for rCalSpan
/// Lays out multi-day order/demo events on week and month grids
#[derive(Parser)]
#[command(
    name = "rcalspan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Multi-day calendar layout: span metadata, week clipping and lane assignment",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override events source file (.json, .yaml, .yml, .csv)
    #[arg(global = true, long = "events", value_name = "FILE")]
    pub events: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output on stderr (-q warn, -qq error)
    #[arg(global = true, short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable ANSI colours in calendar output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with defaults
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the visible dates of a week or month grid
    Grid {
        /// Anchor date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, help = "Grid mode (default from config)")]
        view: Option<ViewMode>,

        #[arg(
            long,
            default_value_t = 0,
            allow_hyphen_values = true,
            help = "Move by whole weeks/months from the anchor"
        )]
        offset: i32,
    },

    /// Show where a date falls inside a span
    Span {
        /// Date to inspect (YYYY-MM-DD)
        date: String,
        /// First day of the span
        start: String,
        /// Last day of the span (inclusive)
        end: String,
    },

    /// Print the lane assigned to each event
    Lanes {
        /// Anchor date of the grid (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, help = "Grid mode (default from config)")]
        view: Option<ViewMode>,

        #[arg(long = "all", help = "List every loaded event, not only the visible ones")]
        all: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Render the calendar with lane bars
    Show {
        /// Anchor date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, help = "Grid mode (default from config)")]
        view: Option<ViewMode>,

        #[arg(
            long,
            default_value_t = 0,
            allow_hyphen_values = true,
            help = "Move by whole weeks/months from the anchor"
        )]
        offset: i32,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the events touching one date, in display order
    Day {
        /// Date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the layout segments
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        /// Anchor date (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, help = "Grid mode (default from config)")]
        view: Option<ViewMode>,

        #[arg(
            long,
            default_value_t = 0,
            allow_hyphen_values = true,
            help = "Move by whole weeks/months from the anchor"
        )]
        offset: i32,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Event selection shared by the commands that read the events source
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "kind", value_enum, help = "Only events of this kind (repeatable)")]
    pub kind: Vec<EventKind>,

    #[arg(
        long = "status",
        value_delimiter = ',',
        help = "Only events with this status (repeatable or comma-separated)"
    )]
    pub status: Vec<String>,

    #[arg(
        long = "search",
        value_name = "TEXT",
        help = "Only events whose title or status contains TEXT"
    )]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> EventFilter {
        EventFilter {
            kinds: self.kind.clone(),
            statuses: self.status.clone(),
            search: self.search.clone(),
        }
    }
}
