//! `WhatsApp` transcript line classification.
//!
//! An exported transcript is line oriented. A message starts with a header
//! line:
//!
//! ```text
//! [15/03/2021, 09:41:07] Alice: See you at 10: the usual place [bring cash]
//! ```
//!
//! and may continue over any number of bracket-free lines. Lines that are
//! neither (a stray `[` or `]` without a valid header) are dropped.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{ChatstatsError, Result, TimestampError};

/// Date-time format used inside the header brackets.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

// Leading junk (bidi marks, BOM) is skipped lazily. The date stops at the
// first "] ", the sender at the first ": ". The body must be non-empty.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*?\[(?P<date>.+?)\] (?P<sender>.+?): (?P<body>.+)")
        .expect("header pattern is valid")
});

// chrono accepts unpadded numeric fields, so the layout is checked first.
static TIMESTAMP_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}, [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("timestamp layout pattern is valid")
});

/// Fields extracted from a header line.
#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    /// Text between the brackets, as captured
    pub timestamp_text: &'a str,
    /// Parsed timestamp
    pub timestamp: DateTime<Utc>,
    /// Raw sender label, not yet resolved
    pub sender: &'a str,
    /// Message text after `sender: `
    pub body: &'a str,
}

/// Classification of a single transcript line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// Starts a new message
    Header(Header<'a>),
    /// Belongs to the previous message
    Continuation,
    /// Contains a bracket but no valid header; ignored
    Unparseable,
}

/// Parses a header date-time such as `15/03/2021, 09:41:07` as UTC.
///
/// Every field must be zero-padded to its full width.
pub fn parse_timestamp(text: &str) -> std::result::Result<DateTime<Utc>, TimestampError> {
    if !TIMESTAMP_LAYOUT.is_match(text) {
        return Err(TimestampError::Layout);
    }
    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc())
}

/// Extracts the header of `line`, if it is one.
///
/// `line_number` is 1-based and only used for error reporting. A line that
/// has header shape but an unparseable date is an error, not `None`.
pub fn parse_header_line(line: &str, line_number: usize) -> Result<Option<Header<'_>>> {
    let Some(caps) = HEADER.captures(line) else {
        return Ok(None);
    };

    let (Some(date), Some(sender), Some(body)) =
        (caps.name("date"), caps.name("sender"), caps.name("body"))
    else {
        return Ok(None);
    };

    let timestamp = parse_timestamp(date.as_str())
        .map_err(|e| ChatstatsError::invalid_timestamp(line_number, date.as_str(), e))?;

    Ok(Some(Header {
        timestamp_text: date.as_str(),
        timestamp,
        sender: sender.as_str(),
        body: body.as_str(),
    }))
}

/// `true` for lines with no bracket characters at all, including empty ones.
pub fn is_continuation(line: &str) -> bool {
    !line.contains(['[', ']'])
}

/// Classifies one transcript line.
pub fn classify_line(line: &str, line_number: usize) -> Result<LineKind<'_>> {
    if let Some(header) = parse_header_line(line, line_number)? {
        return Ok(LineKind::Header(header));
    }

    if is_continuation(line) {
        Ok(LineKind::Continuation)
    } else {
        Ok(LineKind::Unparseable)
    }
}
