//! Transcript parser.
//!
//! [`ChatParser`] turns the lines of an exported transcript into
//! [`GroupedMessages`]: one ordered list of [`Message`]s per resolved
//! [`User`].
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::NumberMap;
//! use chatstats::parser::ChatParser;
//!
//! let transcript = "[01/01/2021, 10:00:00] Alice: hello\n\
//!                   world\n\
//!                   [01/01/2021, 10:05:00] Bob: hi";
//!
//! let parser = ChatParser::new(NumberMap::new());
//! let grouped = parser.parse_str(transcript)?;
//!
//! let alice = grouped.get("Alice").unwrap();
//! assert_eq!(alice.len(), 1);
//! assert_eq!(alice[0].line_count(), 2);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::Message;
use crate::config::NumberMap;
use crate::error::{ChatstatsError, Result};
use crate::parsing::{LineKind, classify_line};
use crate::user::{User, resolve_user};

/// Messages of a single user, in transcript order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMessages {
    pub user: User,
    pub messages: Vec<Message>,
}

/// How many lines fell into each class during a parse.
///
/// `headers + continuations + dropped == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub headers: usize,
    pub continuations: usize,
    pub dropped: usize,
    pub total: usize,
}

/// Messages grouped by user.
///
/// Users are kept in order of their first message in the transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedMessages {
    groups: Vec<UserMessages>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip)]
    summary: ParseSummary,
}

impl GroupedMessages {
    /// Appends `message` to its user's group, creating the group on first
    /// sight. Returns the position of the message as `(group, index)`.
    fn push(&mut self, message: Message) -> (usize, usize) {
        let name = message.user().name();
        let group = match self.index.get(name) {
            Some(&group) => group,
            None => {
                let group = self.groups.len();
                self.index.insert(name.to_string(), group);
                self.groups.push(UserMessages {
                    user: message.user().clone(),
                    messages: Vec::new(),
                });
                group
            }
        };

        let messages = &mut self.groups[group].messages;
        messages.push(message);
        (group, messages.len() - 1)
    }

    /// Messages of the user with this canonical name.
    pub fn get(&self, name: &str) -> Option<&[Message]> {
        self.index
            .get(name)
            .map(|&group| self.groups[group].messages.as_slice())
    }

    /// Iterates over `(user, messages)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&User, &[Message])> {
        self.groups
            .iter()
            .map(|group| (&group.user, group.messages.as_slice()))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.groups.iter().map(|group| &group.user)
    }

    /// Every message of every user, group by group.
    pub fn all_messages(&self) -> Vec<Message> {
        self.groups
            .iter()
            .flat_map(|group| group.messages.iter().cloned())
            .collect()
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of messages across all users.
    pub fn total_messages(&self) -> usize {
        self.groups.iter().map(|group| group.messages.len()).sum()
    }

    /// Line classification counts of the parse that produced this value.
    pub fn summary(&self) -> ParseSummary {
        self.summary
    }
}

/// Parser for `WhatsApp` TXT transcripts with `[DD/MM/YYYY, HH:MM:SS]`
/// headers.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    numbers: NumberMap,
}

impl ChatParser {
    /// Creates a parser that resolves phone-number senders through `numbers`.
    pub fn new(numbers: NumberMap) -> Self {
        Self { numbers }
    }

    /// Returns the number map used for sender resolution.
    pub fn numbers(&self) -> &NumberMap {
        &self.numbers
    }

    /// Reads and parses a transcript file.
    pub fn parse(&self, path: &Path) -> Result<GroupedMessages> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses transcript content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<GroupedMessages> {
        self.parse_lines(content.lines())
    }

    /// Parses a sequence of transcript lines.
    ///
    /// Fails on the first header with a malformed timestamp and on a
    /// continuation line that precedes every header. Lines with stray
    /// brackets are dropped.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<GroupedMessages>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped = GroupedMessages::default();
        let mut current: Option<(usize, usize)> = None;

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_number = i + 1;
            grouped.summary.total += 1;

            match classify_line(line, line_number)? {
                LineKind::Header(header) => {
                    let user = resolve_user(header.sender, &self.numbers);
                    let message = Message::new(line, header.body, header.timestamp, user);
                    current = Some(grouped.push(message));
                    grouped.summary.headers += 1;
                }
                LineKind::Continuation => {
                    let (group, index) = current
                        .ok_or_else(|| ChatstatsError::orphan_continuation(line_number))?;
                    grouped.groups[group].messages[index].push_line(line);
                    grouped.summary.continuations += 1;
                }
                LineKind::Unparseable => {
                    tracing::trace!(line = line_number, "dropping unparseable line");
                    grouped.summary.dropped += 1;
                }
            }
        }

        tracing::debug!(
            users = grouped.len(),
            messages = grouped.total_messages(),
            headers = grouped.summary.headers,
            continuations = grouped.summary.continuations,
            dropped = grouped.summary.dropped,
            "parsed transcript"
        );

        Ok(grouped)
    }
}

/// Parses `lines` with a one-off [`ChatParser`].
pub fn parse<I, S>(lines: I, numbers: &NumberMap) -> Result<GroupedMessages>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ChatParser::new(numbers.clone()).parse_lines(lines)
}

/// Parses in-memory transcript content with a one-off [`ChatParser`].
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn parse_str(content: &str, numbers: &NumberMap) -> Result<GroupedMessages> {
    parse(content.lines(), numbers)
}

/// Reads and parses a transcript file with a one-off [`ChatParser`].
pub fn parse_file(path: impl AsRef<Path>, numbers: &NumberMap) -> Result<GroupedMessages> {
    let content = fs::read_to_string(path)?;
    parse_str(&content, numbers)
}
