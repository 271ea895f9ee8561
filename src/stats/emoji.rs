//! Emoji usage.
//!
//! Emoji are counted one Unicode scalar value at a time, so a multi-codepoint
//! sequence such as 👨‍👩‍👧 contributes each of its pictographs and nothing for
//! the joiners. Skin-tone modifiers and variation selectors aren't counted.

use std::collections::HashMap;

use serde::Serialize;

use super::{StatContext, StatValue, top};
use crate::Message;
use crate::error::Result;

/// One entry of the most-used list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Result of the `emojis` stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiStats {
    /// Total number of emoji characters
    pub count: usize,
    /// Most used emoji, descending by count then character; `None` when no
    /// emoji were used at all
    pub most_used: Option<Vec<EmojiCount>>,
}

/// `true` for single-codepoint emoji listed in the Unicode emoji data.
///
/// Characters that are only emoji in their `U+FE0F` presentation form
/// (such as ▶ or ❤) count too. Regional indicators count one by one so a
/// flag contributes two.
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() || ('\u{1F3FB}'..='\u{1F3FF}').contains(&c) {
        return false;
    }
    if ('\u{1F1E6}'..='\u{1F1FF}').contains(&c) {
        return true;
    }

    let mut buf = [0u8; 7];
    let bare = c.encode_utf8(&mut buf).len();
    let qualified = bare + '\u{FE0F}'.encode_utf8(&mut buf[bare..]).len();
    let in_data =
        |len: usize| std::str::from_utf8(&buf[..len]).is_ok_and(|s| emojis::get(s).is_some());

    in_data(bare) || in_data(qualified)
}

/// Counts each emoji character across all messages.
pub fn emoji_histogram(messages: &[Message]) -> HashMap<char, usize> {
    let mut histogram = HashMap::new();
    for line in messages.iter().flat_map(|m| m.raw_lines()) {
        for c in line.chars().filter(|&c| is_emoji(c)) {
            *histogram.entry(c).or_insert(0) += 1;
        }
    }
    histogram
}

/// Total emoji count and the `top_limit` most used.
pub fn emojis(messages: &[Message], top_limit: usize) -> EmojiStats {
    let histogram = emoji_histogram(messages);
    let count = histogram.values().sum();

    let most_used = if histogram.is_empty() {
        None
    } else {
        Some(
            top(histogram.into_iter().map(|(e, c)| (c, e)), top_limit)
                .into_iter()
                .map(|(count, emoji)| EmojiCount { emoji, count })
                .collect(),
        )
    };

    EmojiStats { count, most_used }
}

pub(super) fn emojis_stat(messages: &[Message], ctx: &StatContext<'_>) -> Result<StatValue> {
    Ok(StatValue::Emojis(emojis(messages, ctx.config.top_limit)))
}
