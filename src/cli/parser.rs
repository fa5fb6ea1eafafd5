use crate::export::{ExportFormat, SheetKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rScoreboard
/// CLI application to keep a leaderboard and rotate weekly games with SQLite
#[derive(Parser)]
#[command(
    name = "rscoreboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small scoreboard CLI: cumulative leaderboard and weekly rotating games, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, the configuration and both sheets
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Weekly games: active list, flip, listing and data entry
    Games {
        #[command(subcommand)]
        action: GamesAction,
    },

    /// Leaderboard: show scores or record a delta
    Leaderboard {
        #[command(subcommand)]
        action: LeaderboardAction,
    },

    /// Register the weekly Friday flip (once) and run one flip now
    Schedule {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Pretend the current time is DATETIME (YYYY-MM-DD[ HH:MM])"
        )]
        at: Option<String>,

        #[arg(long = "hour", help = "Hour of the Friday flip (0-23), default from config")]
        hour: Option<u32>,
    },

    /// Registered triggers
    Triggers {
        #[command(subcommand)]
        action: TriggersAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup (tar.gz on Unix, zip on Windows)")]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a sheet
    Export {
        #[arg(long, value_enum)]
        sheet: SheetKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum GamesAction {
    /// Show the games active for the current week
    Active {
        #[arg(long = "date", help = "Evaluate the week window for this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Rewrite every IsActive flag for the current week
    Flip {
        #[arg(long = "date", help = "Evaluate the week window for this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// List every game row
    List {
        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Append a game row
    Add {
        #[arg(long = "week-start", value_name = "DATE", help = "Monday of the game's week (YYYY-MM-DD)")]
        week_start: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        prompt: String,

        #[arg(long, default_value = "")]
        instructions: String,

        #[arg(long = "placeholder", default_value = "")]
        placeholder: String,

        #[arg(long = "active", help = "Store the row with IsActive = true")]
        active: bool,
    },

    /// Append game rows from a CSV file (header: WeekStart,Title,Prompt,...)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum LeaderboardAction {
    /// Show the leaderboard in storage order
    Show {
        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Add DELTA to NAME's score (creates the entry when missing)
    Record {
        name: String,

        #[arg(allow_hyphen_values = true)]
        delta: String,

        #[arg(long = "json", help = "Print JSON instead of a table")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TriggersAction {
    /// List registered triggers
    List,

    /// Fire every trigger that is due now
    Run {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Pretend the current time is DATETIME (YYYY-MM-DD[ HH:MM])"
        )]
        at: Option<String>,
    },
}
