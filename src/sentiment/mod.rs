//! Lexicon-based sentiment scoring.
//!
//! A token contributes +1 when it is in the positive lexicon, -1 when it
//! is in the negative lexicon, and 0 otherwise; the score is the mean
//! contribution over all tokens. Intentionally simple: exact matches only,
//! no stemming, no negation handling.

use ahash::AHashSet;
use lazy_static::lazy_static;

use crate::analysis::WordTokenizer;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "friendly",
    "fast",
    "quick",
    "tasty",
    "delicious",
    "fresh",
    "clean",
    "spotless",
    "helpful",
    "courteous",
    "love",
    "lovely",
    "perfect",
    "outstanding",
    "best",
    "recommend",
    "fantastic",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "rude",
    "slow",
    "bland",
    "cold",
    "overcooked",
    "undercooked",
    "dirty",
    "messy",
    "greasy",
    "smelly",
    "wait",
    "long",
    "disappointed",
    "worst",
    "never",
];

lazy_static! {
    static ref POSITIVE: AHashSet<&'static str> = POSITIVE_WORDS.iter().copied().collect();
    static ref NEGATIVE: AHashSet<&'static str> = NEGATIVE_WORDS.iter().copied().collect();
}

/// Score the sentiment of a text span.
///
/// Returns a value in [-1, 1]; exactly 0.0 for text with no tokens.
///
/// # Examples
///
/// ```
/// use relish::sentiment::sentiment_score;
///
/// assert!(sentiment_score("Great food and friendly service") > 0.0);
/// assert!(sentiment_score("Dirty tables, rude staff") < 0.0);
/// assert_eq!(sentiment_score("1234"), 0.0);
/// ```
pub fn sentiment_score(text: &str) -> f64 {
    let tokens = WordTokenizer::default().terms(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let sum: i64 = tokens
        .iter()
        .map(|token| {
            if POSITIVE.contains(token.as_str()) {
                1
            } else if NEGATIVE.contains(token.as_str()) {
                -1
            } else {
                0
            }
        })
        .sum();

    sum as f64 / tokens.len() as f64
}
