use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rollcall
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily seat-based attendance: mark students absent or on leave and export the lists",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the roster CSV file
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Display language: en (default) or my (Burmese)
    #[arg(global = true, long = "lang")]
    pub lang: Option<String>,

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
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show the seating chart with today's marks
    Grid,

    /// Click a seat: Present → Absent → On leave → Present
    ///
    /// Examples:
    ///   rollcall mark 2 1
    Mark {
        /// Section (class / row) number
        section: u32,
        /// Seat number within the section
        seat: u32,
    },

    /// Show the absent and on-leave lists
    Lists,

    /// Clear every mark (everybody present)
    Reset,

    /// Print (or save) the plain-text absent or on-leave list for pasting
    #[command(group(ArgGroup::new("which").required(true).args(["absent", "leave"])))]
    Copy {
        /// The absent list
        #[arg(long)]
        absent: bool,

        /// The on-leave list
        #[arg(long)]
        leave: bool,

        /// Write the text to this file instead of stdout (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export roster and today's status of every occupied seat
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the roster or write it back out in its source format
    Roster {
        /// Print a per-section summary of the roster
        #[arg(long)]
        print: bool,

        /// Write the roster CSV (Class,Seat,Name,School,Left) to FILE
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the attendance database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
