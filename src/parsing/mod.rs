//! Line-level parsing utilities.
//!
//! This module holds the pieces the [`ChatParser`](crate::parser::ChatParser)
//! is built from: header extraction, timestamp parsing and the three-way
//! line classification.

pub mod whatsapp;

pub use whatsapp::{
    Header, LineKind, TIMESTAMP_FORMAT, classify_line, is_continuation, parse_header_line,
    parse_timestamp,
};
