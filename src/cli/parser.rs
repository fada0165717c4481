use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkhours
/// CLI application to clock in/out and total hours per week
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours CLI: clock in/out, group sessions by week and total the hours",
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
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Clock in, or clock out if a clock-in is open
    Clock {
        #[arg(long = "loc", help = "Location of the clock-in")]
        location: Option<String>,

        #[arg(
            long = "at",
            value_name = "TIME",
            help = "Record at this time instead of now (YYYY-MM-DD HH:MM or RFC 3339)"
        )]
        at: Option<String>,
    },

    /// Add a past clock-in / clock-out pair
    Add {
        #[arg(long = "loc", help = "Location of the session")]
        location: String,

        #[arg(long = "in", value_name = "TIME", help = "Clock-in time (YYYY-MM-DD HH:MM)")]
        start: String,

        #[arg(long = "out", value_name = "TIME", help = "Clock-out time (YYYY-MM-DD HH:MM)")]
        end: String,
    },

    /// List weeks with their total hours
    List {
        #[arg(long = "events", help = "Show every event of each week")]
        events: bool,
    },

    /// Delete one event or a whole week
    Del {
        #[arg(long = "id", help = "Id of the event to delete", conflicts_with = "week")]
        id: Option<i64>,

        #[arg(
            long = "week",
            value_name = "WEEK",
            help = "Any date of the week (YYYY-MM-DD) or a week key (YYYY-MM-DD/YYYY-MM-DD)",
            required_unless_present = "id"
        )]
        week: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import events from a JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
