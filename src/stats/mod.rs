//! Stat reductions over message lists.
//!
//! Every stat is a plain function from a message list to a [`StatValue`].
//! The set of stats is fixed and listed in [`REGISTRY`]; [`compute_stats`]
//! runs all of them, in registry order, over one list.
//!
//! - [`activity`] - per-day activity and longest streak
//! - [`counts`] - date range, line/message/character counts
//! - [`emoji`] - emoji histogram
//! - [`sentiment`] - polarity summary through a [`SentimentAnalyzer`]
//! - [`sharing`] - shared media counts
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{NumberMap, StatsConfig};
//! use chatstats::parser::ChatParser;
//! use chatstats::stats::{StatContext, StatKind, StatValue, compute_stats};
//! use chatstats::stats::sentiment::LexiconAnalyzer;
//!
//! let grouped = ChatParser::new(NumberMap::new())
//!     .parse_str("[01/01/2021, 10:00:00] Alice: hello 🎉")?;
//!
//! let config = StatsConfig::default();
//! let analyzer = LexiconAnalyzer::new();
//! let ctx = StatContext::new(&config, &analyzer);
//!
//! let stats = compute_stats(grouped.get("Alice").unwrap(), &ctx)?;
//! assert!(matches!(stats.get(StatKind::NumMessages), Some(StatValue::Count(1))));
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod activity;
pub mod counts;
pub mod emoji;
pub mod sentiment;
pub mod sharing;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::Message;
use crate::config::StatsConfig;
use crate::error::Result;

pub use activity::{Activity, DayCount, Streak};
pub use emoji::EmojiStats;
pub use sentiment::{SentimentAnalyzer, SentimentStats};
pub use sharing::SharingStats;

/// Shared, read-only inputs of every stat function.
#[derive(Clone, Copy)]
pub struct StatContext<'a> {
    pub config: &'a StatsConfig,
    pub analyzer: &'a dyn SentimentAnalyzer,
}

impl<'a> StatContext<'a> {
    pub fn new(config: &'a StatsConfig, analyzer: &'a dyn SentimentAnalyzer) -> Self {
        Self { config, analyzer }
    }
}

/// Names of the registered stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKind {
    Start,
    End,
    NumLines,
    NumMessages,
    NumCharacters,
    Emojis,
    Sentiment,
    Sharing,
    Activity,
}

impl StatKind {
    /// Key used for this stat in reports.
    pub fn name(self) -> &'static str {
        match self {
            StatKind::Start => "start",
            StatKind::End => "end",
            StatKind::NumLines => "num_lines",
            StatKind::NumMessages => "num_messages",
            StatKind::NumCharacters => "num_characters",
            StatKind::Emojis => "emojis",
            StatKind::Sentiment => "sentiment",
            StatKind::Sharing => "sharing",
            StatKind::Activity => "activity",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of a single stat function.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Timestamp(DateTime<Utc>),
    Count(usize),
    Emojis(EmojiStats),
    Sentiment(SentimentStats),
    Sharing(SharingStats),
    Activity(Activity),
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StatValue::Timestamp(ts) => ts.serialize(serializer),
            StatValue::Count(n) => n.serialize(serializer),
            StatValue::Emojis(v) => v.serialize(serializer),
            StatValue::Sentiment(v) => v.serialize(serializer),
            StatValue::Sharing(v) => v.serialize(serializer),
            StatValue::Activity(v) => v.serialize(serializer),
        }
    }
}

/// Signature shared by all stat functions.
pub type StatFn = fn(&[Message], &StatContext<'_>) -> Result<StatValue>;

/// Every stat, in report order.
pub const REGISTRY: &[(StatKind, StatFn)] = &[
    (StatKind::Start, counts::start_stat),
    (StatKind::End, counts::end_stat),
    (StatKind::NumLines, counts::num_lines_stat),
    (StatKind::NumMessages, counts::num_messages_stat),
    (StatKind::NumCharacters, counts::num_characters_stat),
    (StatKind::Emojis, emoji::emojis_stat),
    (StatKind::Sentiment, sentiment::sentiment_stat),
    (StatKind::Sharing, sharing::sharing_stat),
    (StatKind::Activity, activity::activity_stat),
];

/// Results of every registered stat for one message list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stats {
    values: Vec<(StatKind, StatValue)>,
}

impl Stats {
    /// Looks up the value of one stat.
    pub fn get(&self, kind: StatKind) -> Option<&StatValue> {
        self.values
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, &StatValue)> {
        self.values.iter().map(|(kind, value)| (*kind, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (kind, value) in &self.values {
            map.serialize_entry(kind.name(), value)?;
        }
        map.end()
    }
}

/// Runs every registered stat over `messages`.
pub fn compute_stats(messages: &[Message], ctx: &StatContext<'_>) -> Result<Stats> {
    let values = REGISTRY
        .iter()
        .map(|&(kind, stat)| stat(messages, ctx).map(|value| (kind, value)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Stats { values })
}

/// The `limit` largest items, largest first.
///
/// Items compare by their full ordering, so for `(count, key)` pairs ties on
/// count go to the larger key.
pub fn top<T: Ord>(items: impl IntoIterator<Item = T>, limit: usize) -> Vec<T> {
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort_unstable_by(|a, b| b.cmp(a));
    items.truncate(limit);
    items
}
