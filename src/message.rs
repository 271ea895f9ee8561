//! Logical chat message.
//!
//! A [`Message`] is one entry of the transcript: the header line that
//! started it plus any continuation lines that followed. The raw lines are
//! kept as they appeared so that line and character counts reflect the
//! export, not a cleaned-up body.
//!
//! # Example
//!
//! ```
//! use chatstats::Message;
//! use chatstats::user::User;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2021, 1, 1, 10, 0, 0).unwrap();
//! let mut msg = Message::new(
//!     "[01/01/2021, 10:00:00] Alice: hello",
//!     "hello",
//!     ts,
//!     User::new("Alice"),
//! );
//! msg.push_line("world");
//!
//! assert_eq!(msg.line_count(), 2);
//! assert_eq!(msg.full_text(), "[01/01/2021, 10:00:00] Alice: hello\nworld");
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::user::User;

/// A single (possibly multi-line) chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `raw_lines` | `Vec<String>` | Header line followed by continuation lines, never empty |
/// | `body` | `String` | Text after `sender: ` on the header line |
/// | `timestamp` | `DateTime<Utc>` | When the message was sent |
/// | `user` | `User` | Resolved sender |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    raw_lines: Vec<String>,
    body: String,
    timestamp: DateTime<Utc>,
    user: User,
}

impl Message {
    /// Creates a message from its header line.
    pub fn new(
        header_line: impl Into<String>,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
        user: User,
    ) -> Self {
        Self {
            raw_lines: vec![header_line.into()],
            body: body.into(),
            timestamp,
            user,
        }
    }

    /// Appends a continuation line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.raw_lines.push(line.into());
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Body of the header line only, continuation lines excluded.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Calendar day the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    pub fn line_count(&self) -> usize {
        self.raw_lines.len()
    }

    /// Number of Unicode scalar values over all raw lines.
    pub fn char_count(&self) -> usize {
        self.raw_lines.iter().map(|line| line.chars().count()).sum()
    }

    /// Raw lines joined with `\n`.
    pub fn full_text(&self) -> String {
        self.raw_lines.join("\n")
    }
}
