//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all
//! error cases in the library, in the same style as `serde_json` or `csv`.
//!
//! Every error here is fatal for the run that produced it: a transcript is
//! either parsed completely or not at all, and a report is either computed
//! for every user or not returned. Lines that cannot be classified and phone
//! numbers without a mapping are *not* errors.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::parser::GroupedMessages;
///
/// fn my_function() -> Result<GroupedMessages> {
///     Ok(GroupedMessages::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript or number map doesn't
    /// exist, or when the report can't be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A header line carried a date-time that doesn't match
    /// `DD/MM/YYYY, HH:MM:SS`.
    #[error("Invalid timestamp '{input}' on line {line}: {source}")]
    InvalidTimestamp {
        /// 1-based line number in the transcript
        line: usize,
        /// The date-time text captured between the brackets
        input: String,
        /// Why the date-time was rejected
        #[source]
        source: TimestampError,
    },

    /// A continuation line appeared before any header line.
    #[error("Continuation line {line} has no preceding message")]
    OrphanContinuation {
        /// 1-based line number in the transcript
        line: usize,
    },

    /// A stat that needs at least one message was given none.
    #[error("Cannot compute '{stat}' over an empty message list")]
    EmptyMessages {
        /// Name of the stat that was being computed
        stat: &'static str,
    },

    /// The number map file is not a JSON object of strings.
    #[error("Invalid number map: {message}")]
    InvalidNumberMap {
        /// Description of what's wrong
        message: String,
    },

    /// The stats worker pool couldn't be started.
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a header date-time was rejected.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TimestampError {
    /// A field is missing its zero padding, e.g. `1/1/2021, 9:5:0`.
    #[error("expected zero-padded DD/MM/YYYY, HH:MM:SS")]
    Layout,

    /// The fields don't form a valid date-time.
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(
        line: usize,
        input: impl Into<String>,
        source: impl Into<TimestampError>,
    ) -> Self {
        ChatstatsError::InvalidTimestamp {
            line,
            input: input.into(),
            source: source.into(),
        }
    }

    /// Creates an orphan continuation error.
    pub fn orphan_continuation(line: usize) -> Self {
        ChatstatsError::OrphanContinuation { line }
    }

    /// Creates an empty messages error.
    pub fn empty_messages(stat: &'static str) -> Self {
        ChatstatsError::EmptyMessages { stat }
    }

    /// Creates an invalid number map error.
    pub fn invalid_number_map(message: impl Into<String>) -> Self {
        ChatstatsError::InvalidNumberMap {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this error was raised while parsing a transcript.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ChatstatsError::InvalidTimestamp { .. } | ChatstatsError::OrphanContinuation { .. }
        )
    }

    /// Returns `true` if a stat was run over an empty message list.
    pub fn is_empty_messages(&self) -> bool {
        matches!(self, ChatstatsError::EmptyMessages { .. })
    }

    /// Returns the transcript line number, for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ChatstatsError::InvalidTimestamp { line, .. }
            | ChatstatsError::OrphanContinuation { line } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn chrono_error() -> chrono::ParseError {
        NaiveDateTime::parse_from_str("nope", "%d/%m/%Y, %H:%M:%S").unwrap_err()
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatstatsError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = ChatstatsError::invalid_timestamp(7, "32/13/2021, 10:00:00", chrono_error());
        let display = err.to_string();
        assert!(display.contains("32/13/2021, 10:00:00"));
        assert!(display.contains("line 7"));
        assert!(err.is_parse());
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_orphan_continuation_display() {
        let err = ChatstatsError::orphan_continuation(1);
        assert!(err.to_string().contains("Continuation line 1"));
        assert!(err.is_parse());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_empty_messages_display() {
        let err = ChatstatsError::empty_messages("activity");
        assert!(err.to_string().contains("'activity'"));
        assert!(err.is_empty_messages());
        assert!(!err.is_parse());
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatstatsError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = ChatstatsError::invalid_timestamp(1, "x", chrono_error());
        assert!(err.source().is_some());

        let err = ChatstatsError::orphan_continuation(3);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_layout_error_display() {
        let err = ChatstatsError::invalid_timestamp(2, "1/1/2021, 1:0:0", TimestampError::Layout);
        let display = err.to_string();
        assert!(display.contains("'1/1/2021, 1:0:0' on line 2"));
        assert!(display.contains("zero-padded"));
        assert!(err.is_parse());
    }
}
