//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into per-user and
//! whole-conversation statistics.
//!
//! ## Overview
//!
//! A transcript is parsed line by line into messages, grouped by resolved
//! user. Every group, plus the whole conversation, is then reduced through
//! the same table of stats:
//!
//! - first and last message timestamps
//! - line, message and character counts
//! - emoji usage
//! - sentiment polarity
//! - shared media (GIFs, images, videos, audio, locations)
//! - daily activity and the longest streak of active days
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let numbers = NumberMap::from_file("numbers.json")?;
//!     let grouped = ChatParser::new(numbers).parse("_chat.txt".as_ref())?;
//!
//!     let report = compute_report(&grouped, &StatsConfig::default())?;
//!     write_to_format(&report, "report.json", OutputFormat::Json)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - header extraction, timestamps, line classification
//! - [`parser`] - [`ChatParser`](parser::ChatParser) and [`GroupedMessages`](parser::GroupedMessages)
//! - [`user`] - phone number normalization and user resolution
//! - [`message`] - the [`Message`] type
//! - [`stats`] - the stat registry and each stat
//! - [`report`] - parallel report assembly
//! - [`format`] - JSON and plain text rendering
//! - [`config`] - [`StatsConfig`](config::StatsConfig) and [`NumberMap`](config::NumberMap)
//! - [`error`] - [`ChatstatsError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod report;
pub mod stats;
pub mod user;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result, TimestampError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::config::{NumberMap, StatsConfig};
    pub use crate::error::{ChatstatsError, Result};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::parser::{ChatParser, GroupedMessages};
    pub use crate::report::{Report, compute_report, compute_report_with};
    pub use crate::stats::{SentimentAnalyzer, StatKind, StatValue, Stats};
    pub use crate::user::User;
}
