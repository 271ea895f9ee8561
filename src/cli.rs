//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! ```rust
//! use chatstats::cli::OutputFormat;
//!
//! let format: chatstats::format::OutputFormat = OutputFormat::Pretty.into();
//! assert_eq!(format, chatstats::format::OutputFormat::Pretty);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::StatsConfig;
use crate::format;

/// Per-user and whole-conversation statistics for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats _chat.txt
    chatstats _chat.txt --numbers numbers.json -o report.json
    chatstats _chat.txt -o report.txt
    chatstats _chat.txt -f pretty -w 8
    RUST_LOG=chatstats=debug chatstats _chat.txt")]
pub struct Args {
    /// Path to the exported transcript
    pub transcript: PathBuf,

    /// JSON object mapping phone numbers to names
    #[arg(short, long, value_name = "FILE")]
    pub numbers: Option<PathBuf>,

    /// Output format [default: from the -o extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Worker threads for stat computation (0 = one per CPU)
    #[arg(short, long, default_value_t = 4)]
    pub workers: usize,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Stats configuration derived from the flags.
    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig::new().with_workers(self.workers)
    }

    /// The report format: `-f` if given, else inferred from the `-o`
    /// extension, else JSON.
    pub fn output_format(&self) -> format::OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format.into(),
            (None, Some(path)) => format::OutputFormat::from_path(path).unwrap_or_default(),
            (None, None) => format::OutputFormat::default(),
        }
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - pretty-printed JSON (default)
/// - [`Pretty`](OutputFormat::Pretty) - indented text for reading in a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,

    /// Indented plain text
    #[value(alias = "text", alias = "txt")]
    Pretty,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&format::OutputFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for format::OutputFormat {
    fn from(format: OutputFormat) -> format::OutputFormat {
        match format {
            OutputFormat::Json => format::OutputFormat::Json,
            OutputFormat::Pretty => format::OutputFormat::Pretty,
        }
    }
}
