//! Date range and size counts.

use chrono::{DateTime, Utc};

use super::{StatContext, StatValue};
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Timestamp of the earliest message.
pub fn start(messages: &[Message]) -> Result<DateTime<Utc>> {
    messages
        .iter()
        .map(Message::timestamp)
        .min()
        .ok_or_else(|| ChatstatsError::empty_messages("start"))
}

/// Timestamp of the latest message.
pub fn end(messages: &[Message]) -> Result<DateTime<Utc>> {
    messages
        .iter()
        .map(Message::timestamp)
        .max()
        .ok_or_else(|| ChatstatsError::empty_messages("end"))
}

pub fn num_lines(messages: &[Message]) -> usize {
    messages.iter().map(Message::line_count).sum()
}

pub fn num_characters(messages: &[Message]) -> usize {
    messages.iter().map(Message::char_count).sum()
}

pub(super) fn start_stat(messages: &[Message], _ctx: &StatContext<'_>) -> Result<StatValue> {
    start(messages).map(StatValue::Timestamp)
}

pub(super) fn end_stat(messages: &[Message], _ctx: &StatContext<'_>) -> Result<StatValue> {
    end(messages).map(StatValue::Timestamp)
}

pub(super) fn num_lines_stat(messages: &[Message], _ctx: &StatContext<'_>) -> Result<StatValue> {
    Ok(StatValue::Count(num_lines(messages)))
}

pub(super) fn num_messages_stat(
    messages: &[Message],
    _ctx: &StatContext<'_>,
) -> Result<StatValue> {
    Ok(StatValue::Count(messages.len()))
}

pub(super) fn num_characters_stat(
    messages: &[Message],
    _ctx: &StatContext<'_>,
) -> Result<StatValue> {
    Ok(StatValue::Count(num_characters(messages)))
}
