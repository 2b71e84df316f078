//! CLI parse: clap types for studyplan. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Studyplan CLI - turn a course syllabus into a week-by-week self-study calendar
#[derive(Parser)]
#[command(name = "studyplan")]
#[command(about = "Generate multi-week self-study calendars from a course syllabus")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full calendar for a syllabus
    Generate {
        /// Syllabus text file
        syllabus: PathBuf,
        /// Write the exported calendar JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Also generate a practice quiz
        #[arg(long)]
        quiz: bool,
        /// Weeks per generation call (overrides config)
        #[arg(long)]
        batch_size: Option<u32>,
        /// Concurrent calls per wave (overrides config)
        #[arg(long)]
        fan_out: Option<u32>,
    },
    /// Regenerate selected weeks of an exported calendar
    Regenerate {
        /// Syllabus text file the calendar was generated from
        syllabus: PathBuf,
        /// Exported calendar JSON
        #[arg(long)]
        calendar: PathBuf,
        /// Semester info JSON the calendar was built from (`extract --format json`
        /// output); defaults to the `<calendar>.info.json` written by `generate`
        #[arg(long)]
        info: Option<PathBuf>,
        /// Week numbers to regenerate, e.g. --weeks 3,5
        #[arg(long, value_delimiter = ',', required = true)]
        weeks: Vec<u32>,
        /// Write the updated calendar here (defaults to overwriting --calendar)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Extract semester dates, deadlines and topics
    Extract {
        syllabus: PathBuf,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate practice questions
    Quiz {
        syllabus: PathBuf,
        /// Extract major topics first and include them in the request
        #[arg(long)]
        with_topics: bool,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Summarize an exported calendar
    Show {
        /// Exported calendar JSON
        calendar: PathBuf,
        /// Show the full schedule of one week
        #[arg(long)]
        week: Option<u32>,
    },
    /// Write the default configuration to <workspace>/config/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
