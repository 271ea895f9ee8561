//! Sender identity resolution.
//!
//! `WhatsApp` writes senders that aren't in the exporter's address book as
//! raw phone numbers, wrapped in bidi-control characters and with
//! non-breaking spaces between digit groups:
//!
//! ```text
//! \u{202a}+33\u{a0}6\u{a0}40\u{a0}11\u{a0}83\u{a0}32\u{202c}
//! ```
//!
//! [`resolve_user`] normalizes such labels to `"+33 6 40 11 83 32"` and
//! looks them up in a [`NumberMap`]. Anything else is taken verbatim.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::config::NumberMap;

/// At most one leading non-digit, `+`, then digit groups split by exactly
/// one non-digit character each. Trailing text is ignored.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\D?(\+\d+(?:\D\d+)+)").expect("phone number pattern is valid")
});

static DIGIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d+").expect("digit group pattern is valid"));

/// A resolved sender.
///
/// Two users are the same user when their canonical names are equal,
/// regardless of which raw label they were resolved from.
#[derive(Debug, Clone)]
pub struct User {
    canonical_name: String,
    is_unresolved_number: bool,
}

impl User {
    /// Creates a user with a plain display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            canonical_name: name.into(),
            is_unresolved_number: false,
        }
    }

    /// Creates a user for a phone number with no known display name.
    pub fn unresolved_number(number: impl Into<String>) -> Self {
        Self {
            canonical_name: number.into(),
            is_unresolved_number: true,
        }
    }

    /// Display name, or the normalized number for unresolved numbers.
    pub fn name(&self) -> &str {
        &self.canonical_name
    }

    /// `true` when the sender is a phone number missing from the number map.
    pub fn is_unresolved_number(&self) -> bool {
        self.is_unresolved_number
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_name == other.canonical_name
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_name.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name)
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_name)
    }
}

/// Normalizes a phone-number label to space-separated digit groups.
///
/// Returns `None` when the label isn't phone-number shaped.
///
/// ```rust
/// use chatstats::user::normalize_phone_number;
///
/// let label = "\u{202a}+1\u{a0}650\u{a0}555\u{a0}0100\u{202c}";
/// assert_eq!(normalize_phone_number(label).as_deref(), Some("+1 650 555 0100"));
/// assert_eq!(normalize_phone_number("Alice"), None);
/// ```
pub fn normalize_phone_number(label: &str) -> Option<String> {
    let number = PHONE_NUMBER.captures(label)?.get(1)?.as_str();
    let groups: Vec<&str> = DIGIT_GROUP.find_iter(number).map(|m| m.as_str()).collect();
    Some(groups.join(" "))
}

/// Resolves a raw sender label to a [`User`].
///
/// - phone number in `numbers` → the mapped display name
/// - phone number not in `numbers` → the normalized number, flagged unresolved
/// - anything else → the label verbatim
pub fn resolve_user(label: &str, numbers: &NumberMap) -> User {
    match normalize_phone_number(label) {
        Some(number) => match numbers.get(&number) {
            Some(name) => User::new(name),
            None => User::unresolved_number(number),
        },
        None => User::new(label),
    }
}
