use crate::export::ExportFormat;
use crate::models::punch_field::PunchField;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily staff punches (start, end, breaks) and compute work-time totals",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Quick clock: record one punch for a person and date
    Punch {
        /// Which punch to record
        #[arg(value_enum)]
        field: PunchField,

        /// Staff member (id or display name); defaults to the configured person
        #[arg(long, short = 'p')]
        person: Option<String>,

        /// Date of the punch (YYYY-MM-DD), default today
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Time to record (HH:MM:SS), default now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Edit the punches of an existing record
    Edit {
        /// Record id (see `list`)
        id: i64,

        #[arg(long = "start", help = "Clock-in time (HH:MM:SS, 00:00:00 clears)")]
        start: Option<String>,

        #[arg(long = "end", help = "Clock-out time (HH:MM:SS, 00:00:00 clears)")]
        end: Option<String>,

        #[arg(long = "break-start", help = "Break start (HH:MM:SS, 00:00:00 clears)")]
        break_start: Option<String>,

        #[arg(long = "break-end", help = "Break end (HH:MM:SS, 00:00:00 clears)")]
        break_end: Option<String>,
    },

    /// Delete a record by id
    Del {
        /// Record id (see `list`)
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List records, newest date first
    List {
        #[arg(long, short = 'p', help = "Only this staff member")]
        person: Option<String>,

        #[arg(long, short = 'm', help = "Only this month (YYYY-MM)")]
        month: Option<String>,
    },

    /// Monthly work-time totals per staff member
    Stats {
        #[arg(long, short = 'p', help = "Only this staff member")]
        person: Option<String>,

        #[arg(long, short = 'm', help = "Month (YYYY-MM), default current month")]
        month: Option<String>,
    },

    /// Show the staff roster
    Staff,

    /// Export the ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: <label>_<today>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import records from a CSV export (existing records are kept)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
