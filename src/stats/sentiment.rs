//! Sentiment polarity.
//!
//! The scoring model is pluggable: anything implementing
//! [`SentimentAnalyzer`] (closures included) can be used. The bundled
//! [`LexiconAnalyzer`] is a small English/French word list with negation
//! and intensifier handling, good enough for chat banter.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::{StatContext, StatValue};
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Scores text polarity in `[-1.0, 1.0]`.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> SentimentAnalyzer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// A message text and its polarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredText {
    pub score: f64,
    pub text: String,
}

impl ScoredText {
    /// Orders by score, then by text.
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.text.cmp(&other.text))
    }
}

/// Result of the `sentiment` stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentStats {
    pub mean: f64,
    pub positive: usize,
    pub most_positive: ScoredText,
    pub negative: usize,
    pub most_negative: ScoredText,
    pub neutral: usize,
}

/// Summarizes per-message polarity.
///
/// A message is positive above `threshold`, negative below `-threshold`
/// and neutral otherwise (bounds included).
pub fn sentiment(
    messages: &[Message],
    analyzer: &dyn SentimentAnalyzer,
    threshold: f64,
) -> Result<SentimentStats> {
    let scored: Vec<ScoredText> = messages
        .iter()
        .map(|message| {
            let text = message.full_text();
            ScoredText {
                score: analyzer.polarity(&text),
                text,
            }
        })
        .collect();

    let most_positive = scored
        .iter()
        .max_by(|a, b| a.cmp_key(b))
        .cloned()
        .ok_or_else(|| ChatstatsError::empty_messages("sentiment"))?;
    let most_negative = scored
        .iter()
        .min_by(|a, b| a.cmp_key(b))
        .cloned()
        .ok_or_else(|| ChatstatsError::empty_messages("sentiment"))?;

    let mean = scored.iter().map(|s| s.score).sum::<f64>() / scored.len() as f64;
    let positive = scored.iter().filter(|s| s.score > threshold).count();
    let negative = scored.iter().filter(|s| s.score < -threshold).count();
    let neutral = scored.len() - positive - negative;

    Ok(SentimentStats {
        mean,
        positive,
        most_positive,
        negative,
        most_negative,
        neutral,
    })
}

pub(super) fn sentiment_stat(messages: &[Message], ctx: &StatContext<'_>) -> Result<StatValue> {
    sentiment(messages, ctx.analyzer, ctx.config.sentiment_threshold).map(StatValue::Sentiment)
}

// ============================================================================
// Lexicon analyzer
// ============================================================================

const LEXICON_EN: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("excellent", 1.0),
    ("nice", 0.6),
    ("love", 0.5),
    ("lovely", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("cool", 0.35),
    ("fun", 0.3),
    ("funny", 0.25),
    ("best", 1.0),
    ("better", 0.5),
    ("perfect", 1.0),
    ("thanks", 0.2),
    ("beautiful", 0.85),
    ("wonderful", 1.0),
    ("yay", 0.6),
    ("lol", 0.8),
    ("haha", 0.2),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("hate", -0.8),
    ("sad", -0.5),
    ("angry", -0.5),
    ("worst", -1.0),
    ("worse", -0.4),
    ("boring", -1.0),
    ("ugly", -0.7),
    ("sorry", -0.5),
    ("stupid", -0.8),
    ("annoying", -0.8),
    ("tired", -0.4),
    ("sick", -0.7),
    ("wrong", -0.5),
    ("poor", -0.4),
];

const LEXICON_FR: &[(&str, f64)] = &[
    ("bien", 0.4),
    ("bon", 0.5),
    ("bonne", 0.5),
    ("super", 0.7),
    ("génial", 0.8),
    ("geniale", 0.8),
    ("excellent", 1.0),
    ("parfait", 1.0),
    ("beau", 0.6),
    ("belle", 0.6),
    ("content", 0.5),
    ("contente", 0.5),
    ("heureux", 0.8),
    ("heureuse", 0.8),
    ("merci", 0.3),
    ("cool", 0.35),
    ("top", 0.5),
    ("adore", 0.7),
    ("aime", 0.5),
    ("magnifique", 1.0),
    ("mal", -0.5),
    ("mauvais", -0.7),
    ("mauvaise", -0.7),
    ("nul", -0.8),
    ("nulle", -0.8),
    ("triste", -0.6),
    ("horrible", -1.0),
    ("déteste", -0.8),
    ("fatigué", -0.4),
    ("fatiguée", -0.4),
    ("malade", -0.6),
    ("énervé", -0.6),
    ("pire", -1.0),
    ("désolé", -0.4),
    ("désolée", -0.4),
    ("chiant", -0.7),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "without", "pas", "jamais", "rien", "sans", "aucun",
    "aucune",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "too", "très", "vraiment", "trop", "tellement",
];

/// Words after a negator that it still applies to.
const NEGATION_WINDOW: usize = 3;

static DEFAULT_LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    LEXICON_EN
        .iter()
        .chain(LEXICON_FR)
        .map(|&(word, score)| (word, score))
        .collect()
});

/// Word-list polarity scorer.
///
/// The score of a text is the mean polarity of the lexicon words it
/// contains, `0.0` when it contains none. A negator flips and halves the
/// next scored word within a few tokens; an intensifier multiplies the next
/// scored word by 1.5.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|(&word, &score)| (word.to_string(), score))
                .collect(),
        }
    }
}

impl LexiconAnalyzer {
    /// Creates an analyzer with the bundled English and French word lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overrides a word's polarity.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>, score: f64) -> Self {
        self.lexicon
            .insert(word.into().to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    fn is_negator(token: &str) -> bool {
        NEGATORS.contains(&token) || token.ends_with("n't")
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty());

        let mut scores = Vec::new();
        let mut negation_left = 0usize;
        let mut intensify = false;

        for token in tokens {
            if Self::is_negator(token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if INTENSIFIERS.contains(&token) {
                intensify = true;
                continue;
            }

            if let Some(&score) = self.lexicon.get(token) {
                let mut score = score;
                if intensify {
                    score *= 1.5;
                }
                if negation_left > 0 {
                    score *= -0.5;
                }
                scores.push(score.clamp(-1.0, 1.0));
                negation_left = 0;
                intensify = false;
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
        }

        if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }
}
