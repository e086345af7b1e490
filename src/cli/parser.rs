use crate::export::ArtifactFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for zeitaufzeichnung
/// CLI application to capture monthly time sheets with SQLite
#[derive(Parser)]
#[command(
    name = "zeitaufzeichnung",
    version = env!("CARGO_PKG_VERSION"),
    about = "Capture monthly church-payroll time sheets, project them onto the pre-printed form and track submissions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Record owner (defaults to the configured user)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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

    /// Manage the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Open the configuration file in an editor
        #[arg(long = "edit", help = "Edit the configuration file")]
        edit_config: bool,

        /// Editor to use (defaults to $EDITOR/$VISUAL, then nano/notepad)
        #[arg(long)]
        editor: Option<String>,
    },

    /// Show or update the master data merged into every submission
    Profile {
        #[arg(long = "show", help = "Print the stored profile")]
        show: bool,

        #[arg(long)]
        vorname: Option<String>,

        #[arg(long)]
        nachname: Option<String>,

        /// Birth date (YYYY-MM-DD or DD.MM.YYYY)
        #[arg(long)]
        geburtsdatum: Option<String>,

        /// Personnel number
        #[arg(long = "pers-nr")]
        personalnummer: Option<String>,

        /// Assignment location
        #[arg(long)]
        einsatzort: Option<String>,

        /// Parish cost center code
        #[arg(long)]
        gkz: Option<String>,
    },

    /// Save (create or overwrite) the draft for a month
    Save {
        /// Month of the record (MM/YYYY)
        month: String,

        /// JSON file with the month's header fields and entries
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the draft stored for a month
    Show {
        /// Month of the record (MM/YYYY)
        month: String,
    },

    /// List all drafts of the current user
    List,

    /// Delete the draft for a month (submissions are kept)
    Del {
        /// Month of the record (MM/YYYY)
        month: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Freeze the month's draft into an immutable submission
    Submit {
        /// Month of the record (MM/YYYY)
        month: String,
    },

    /// List submissions of the current user
    Submissions {
        /// Only show submissions for this month (MM/YYYY)
        #[arg(long)]
        month: Option<String>,
    },

    /// Render the filled form sheet as PDF
    Render {
        /// Month of the record (MM/YYYY)
        month: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Render a frozen submission snapshot instead of the draft
        #[arg(long, value_name = "ID")]
        submission: Option<i64>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the month's header fields as flat CSV
    Export {
        /// Month of the record (MM/YYYY)
        month: String,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Render the month and place it in the delivery outbox
    Send {
        /// Month of the record (MM/YYYY)
        month: String,

        /// Comma-separated recipient addresses (default: configured list)
        #[arg(long, value_name = "RECIPIENTS")]
        to: Option<String>,

        /// Artifact format to deliver
        #[arg(long, value_enum, default_value = "pdf")]
        format: ArtifactFormat,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
