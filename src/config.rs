//! Configuration types for parsing and stats computation.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`NumberMap`] - phone number → display name lookup used while parsing
//! - [`StatsConfig`] - worker pool size and reduction tuning
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{NumberMap, StatsConfig};
//!
//! let numbers = NumberMap::from_json_str(r#"{"+1 650 555 0100": "Carol"}"#)?;
//! assert_eq!(numbers.get("+1 650 555 0100"), Some("Carol"));
//!
//! let config = StatsConfig::new().with_workers(2);
//! assert_eq!(config.workers, 2);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// Mapping from a normalized phone number to a display name.
///
/// Keys use the normalized form produced by
/// [`resolve_user`](crate::user::resolve_user): digit groups separated by
/// single spaces, with the leading `+` kept on the first group
/// (`"+33 6 40 11 83 32"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberMap {
    entries: BTreeMap<String, String>,
}

impl NumberMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of `"number": "name"` pairs.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let serde_json::Value::Object(object) = value else {
            return Err(ChatstatsError::invalid_number_map(
                "expected a JSON object of \"number\": \"name\" pairs",
            ));
        };

        let mut entries = BTreeMap::new();
        for (number, name) in object {
            match name {
                serde_json::Value::String(name) => {
                    entries.insert(number, name);
                }
                other => {
                    return Err(ChatstatsError::invalid_number_map(format!(
                        "value for '{number}' must be a string, got {other}"
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Reads and parses a number map file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, number: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(number.into(), name.into());
    }

    /// Looks up the display name for a normalized number.
    pub fn get(&self, number: &str) -> Option<&str> {
        self.entries.get(number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NumberMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Configuration for stats computation.
///
/// # Example
///
/// ```rust
/// use chatstats::config::StatsConfig;
///
/// let config = StatsConfig::new()
///     .with_workers(8)
///     .with_top_limit(5);
/// assert_eq!(config.top_limit, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Size of the worker pool, 0 means one per CPU (default: 4)
    pub workers: usize,

    /// How many entries the "most used"/"most active" lists keep (default: 3)
    pub top_limit: usize,

    /// Polarity above `+threshold` is positive, below `-threshold` negative
    /// (default: 0.1)
    pub sentiment_threshold: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            top_limit: 3,
            sentiment_threshold: 0.1,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worker pool size.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the length of top-k lists.
    #[must_use]
    pub fn with_top_limit(mut self, limit: usize) -> Self {
        self.top_limit = limit;
        self
    }

    /// Sets the neutral band half-width for sentiment.
    #[must_use]
    pub fn with_sentiment_threshold(mut self, threshold: f64) -> Self {
        self.sentiment_threshold = threshold;
        self
    }
}
