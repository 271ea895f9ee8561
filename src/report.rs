//! Report assembly.
//!
//! A report holds the stats of every user plus those of the whole group.
//! Each (key, message list) pair is an independent task; tasks run on a
//! fixed-size rayon pool and the results are gathered before the report is
//! built, so completion order never shows in the output.

use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::Message;
use crate::config::StatsConfig;
use crate::error::Result;
use crate::parser::GroupedMessages;
use crate::stats::sentiment::LexiconAnalyzer;
use crate::stats::{SentimentAnalyzer, StatContext, Stats, compute_stats};

/// Stats of the whole conversation and of each user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub group: Stats,
    /// Per-user stats keyed by canonical name, in first-appearance order
    pub users: Vec<(String, Stats)>,
}

impl Report {
    /// Stats of the user with this canonical name.
    pub fn user(&self, name: &str) -> Option<&Stats> {
        self.users
            .iter()
            .find(|(user, _)| user == name)
            .map(|(_, stats)| stats)
    }
}

struct UsersMap<'a>(&'a [(String, Stats)]);

impl Serialize for UsersMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, stats) in self.0 {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("Report", 2)?;
        report.serialize_field("group", &self.group)?;
        report.serialize_field("users", &UsersMap(&self.users))?;
        report.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TaskKey {
    User(String),
    Group,
}

/// Computes a report with the bundled [`LexiconAnalyzer`].
pub fn compute_report(grouped: &GroupedMessages, config: &StatsConfig) -> Result<Report> {
    compute_report_with(grouped, config, &LexiconAnalyzer::new())
}

/// Computes a report with a caller-provided sentiment analyzer.
///
/// Fails if any stat fails for any user or for the group, e.g. when
/// `grouped` holds no messages at all.
pub fn compute_report_with(
    grouped: &GroupedMessages,
    config: &StatsConfig,
    analyzer: &dyn SentimentAnalyzer,
) -> Result<Report> {
    let all_messages = grouped.all_messages();

    let mut tasks: Vec<(TaskKey, &[Message])> = grouped
        .iter()
        .map(|(user, messages)| (TaskKey::User(user.name().to_string()), messages))
        .collect();
    tasks.push((TaskKey::Group, all_messages.as_slice()));

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("chatstats-worker-{i}"))
        .build()?;

    tracing::debug!(
        tasks = tasks.len(),
        workers = pool.current_num_threads(),
        "computing stats"
    );

    let ctx = StatContext::new(config, analyzer);
    let results: Vec<(TaskKey, Stats)> = pool.install(|| {
        tasks
            .par_iter()
            .map(|(key, messages)| {
                tracing::debug!(?key, messages = messages.len(), "stats task");
                compute_stats(messages, &ctx).map(|stats| (key.clone(), stats))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut report = Report::default();
    for (key, stats) in results {
        match key {
            TaskKey::User(name) => report.users.push((name, stats)),
            TaskKey::Group => report.group = stats,
        }
    }

    tracing::info!(
        users = report.users.len(),
        messages = all_messages.len(),
        "report ready"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberMap;
    use crate::parser::ChatParser;
    use crate::stats::{StatKind, StatValue};

    fn grouped() -> GroupedMessages {
        ChatParser::new(NumberMap::new())
            .parse_str(
                "[01/01/2021, 10:00:00] Alice: hello 😀\n\
                 world\n\
                 [01/01/2021, 10:05:00] Bob: hi\n\
                 [02/01/2021, 08:00:00] Alice: image omitted",
            )
            .unwrap()
    }

    #[test]
    fn test_report_has_group_and_users() {
        let report = compute_report(&grouped(), &StatsConfig::default()).unwrap();

        let names: Vec<&str> = report.users.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);

        assert_eq!(
            report.group.get(StatKind::NumMessages),
            Some(&StatValue::Count(3))
        );
        assert_eq!(
            report.user("Alice").unwrap().get(StatKind::NumLines),
            Some(&StatValue::Count(3))
        );
        assert_eq!(
            report.user("Bob").unwrap().get(StatKind::NumMessages),
            Some(&StatValue::Count(1))
        );
    }

    #[test]
    fn test_report_is_independent_of_worker_count() {
        let grouped = grouped();
        let one = compute_report(&grouped, &StatsConfig::new().with_workers(1)).unwrap();
        let many = compute_report(&grouped, &StatsConfig::new().with_workers(8)).unwrap();
        assert_eq!(one, many);
        assert_eq!(
            serde_json::to_string(&one).unwrap(),
            serde_json::to_string(&many).unwrap()
        );
    }

    #[test]
    fn test_report_serialization_shape() {
        let report = compute_report(&grouped(), &StatsConfig::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert!(value["group"]["activity"]["longest_streak"].is_object());
        assert_eq!(value["users"]["Alice"]["sharing"]["Image"], 1);
        assert_eq!(value["users"]["Bob"]["emojis"]["most_used"], serde_json::Value::Null);
        assert_eq!(value["group"]["emojis"]["count"], 1);
    }

    #[test]
    fn test_empty_transcript_is_error() {
        let empty = GroupedMessages::default();
        let err = compute_report(&empty, &StatsConfig::default()).unwrap_err();
        assert!(err.is_empty_messages());
    }

    #[test]
    fn test_custom_analyzer() {
        let analyzer = |_: &str| -0.9;
        let report =
            compute_report_with(&grouped(), &StatsConfig::default(), &analyzer).unwrap();
        match report.group.get(StatKind::Sentiment) {
            Some(StatValue::Sentiment(s)) => assert_eq!(s.negative, 3),
            other => panic!("unexpected sentiment value: {other:?}"),
        }
    }
}
