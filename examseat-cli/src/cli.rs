//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `ExamSeat` command-line interface for examination seating
#[derive(Parser)]
#[command(name = "examseat")]
#[command(author, version, about = "Examination seat allocation")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warnings and progress messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Seat one exam session and print the seating report
    #[command(about = "Allocate seats and print the master roster and attendance sheets")]
    Allocate {
        /// Student roster file (.csv or .json)
        #[arg(short, long)]
        students: PathBuf,

        /// Room list file (.csv or .json), seated in file order
        #[arg(short, long)]
        rooms: PathBuf,

        /// Faculty duty file (.csv or .json) for invigilator assignment
        #[arg(short, long)]
        faculty: Option<PathBuf>,

        /// Exam date of the session to seat
        #[arg(long, requires = "time")]
        date: Option<String>,

        /// Exam time of the session to seat
        #[arg(long, requires = "date")]
        time: Option<String>,

        /// Use the largest rooms first
        #[arg(long)]
        sort_rooms: bool,

        /// Report format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the seat grid of every room
        #[arg(long)]
        show_grid: bool,
    },

    /// Estimate the seats and rooms a session needs
    #[command(about = "Show the capacity needed to space a session")]
    Estimate {
        /// Student roster file (.csv or .json)
        #[arg(short, long)]
        students: PathBuf,

        /// Room list file (.csv or .json)
        #[arg(short, long)]
        rooms: PathBuf,

        /// Exam date of the session
        #[arg(long, requires = "time")]
        date: Option<String>,

        /// Exam time of the session
        #[arg(long, requires = "date")]
        time: Option<String>,

        /// Output format
        #[arg(long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// List the exam sessions in a roster
    #[command(about = "List the exam sessions (date and time) found in a roster")]
    Sessions {
        /// Student roster file (.csv or .json)
        #[arg(short, long)]
        students: PathBuf,

        /// Output format
        #[arg(long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Write the demo dataset
    #[command(about = "Write demo students.csv, rooms.csv and faculty.csv files")]
    Sample {
        /// Directory to write the files into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Settings file management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for reports and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text tables
    Table,
    /// JSON document
    Json,
    /// Comma separated values
    Csv,
}

impl From<examseat_core::config::OutputFormat> for OutputFormat {
    fn from(format: examseat_core::config::OutputFormat) -> Self {
        use examseat_core::config::OutputFormat as Configured;
        match format {
            Configured::Table => Self::Table,
            Configured::Json => Self::Json,
            Configured::Csv => Self::Csv,
        }
    }
}
