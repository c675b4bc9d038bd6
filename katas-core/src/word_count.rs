//! Word counting with four tokenization strategies.
//!
//! The strategies intentionally disagree on some inputs:
//!
//! - [`count_simple_split`] trims the text and splits on every single space,
//!   so each run of consecutive spaces adds empty tokens to the count.
//!   `" abc  def ghi "` counts as 4.
//! - [`count_split_remove_empty`] splits on spaces and drops empty tokens.
//!   Tabs and newlines are not separators for it.
//! - [`count_regex_word_boundary`] counts runs of word characters
//!   (`\b\w+\b`), so punctuation separates words and is never one.
//! - [`count_manual_scan`] counts transitions from whitespace into
//!   non-whitespace, treating every Unicode whitespace character alike.
//!
//! Every strategy rejects empty or whitespace-only text with
//! [`KataError::InvalidArgument`]. Absent text (`None`) goes through
//! [`count_words`], which applies the same gate.

use crate::error::{KataError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const WORD_PATTERN: &str = r"\b\w+\b";

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

/// Reject absent, empty and whitespace-only text.
pub fn require_text(text: Option<&str>) -> Result<&str> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => {
            log::debug!("rejecting blank word-count input");
            Err(KataError::invalid_argument(
                "Input string cannot be null or empty.",
            ))
        }
    }
}

/// Trims the text, then counts the tokens of a split on `' '`.
///
/// Consecutive inner spaces produce empty tokens that are still counted.
///
/// # Example
///
/// ```rust
/// use katas_core::count_simple_split;
///
/// assert_eq!(count_simple_split("abc def").unwrap(), 2);
/// assert_eq!(count_simple_split(" abc  def ghi ").unwrap(), 4);
/// ```
pub fn count_simple_split(text: &str) -> Result<usize> {
    let text = require_text(Some(text))?;
    Ok(text.trim().split(' ').count())
}

/// Counts the non-empty tokens of a split on `' '`.
pub fn count_split_remove_empty(text: &str) -> Result<usize> {
    let text = require_text(Some(text))?;
    Ok(text.split(' ').filter(|token| !token.is_empty()).count())
}

/// Counts maximal runs of alphanumeric or underscore characters.
pub fn count_regex_word_boundary(text: &str) -> Result<usize> {
    let text = require_text(Some(text))?;
    Ok(word_regex().find_iter(text).count())
}

/// Counts words with a single pass over the characters.
pub fn count_manual_scan(text: &str) -> Result<usize> {
    let text = require_text(Some(text))?;

    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    Ok(count)
}

/// Count the words of possibly absent text with the given strategy.
///
/// # Example
///
/// ```rust
/// use katas_core::{count_words, WordCountStrategy};
///
/// assert_eq!(count_words(Some("one two"), WordCountStrategy::ManualScan).unwrap(), 2);
/// assert!(count_words(None, WordCountStrategy::ManualScan).is_err());
/// ```
pub fn count_words(text: Option<&str>, strategy: WordCountStrategy) -> Result<usize> {
    strategy.count(require_text(text)?)
}

/// Names one of the word-count strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WordCountStrategy {
    /// Trim, then split on single spaces
    SimpleSplit,
    /// Split on spaces, dropping empty tokens
    SplitRemoveEmpty,
    /// Count `\b\w+\b` matches
    RegexWordBoundary,
    /// Character scan with an in-word flag
    ManualScan,
}

impl WordCountStrategy {
    /// Every strategy, in presentation order
    pub const ALL: [WordCountStrategy; 4] = [
        WordCountStrategy::SimpleSplit,
        WordCountStrategy::SplitRemoveEmpty,
        WordCountStrategy::RegexWordBoundary,
        WordCountStrategy::ManualScan,
    ];

    /// Human-readable strategy name
    pub fn name(&self) -> &'static str {
        match self {
            WordCountStrategy::SimpleSplit => "simple split",
            WordCountStrategy::SplitRemoveEmpty => "split removing empty entries",
            WordCountStrategy::RegexWordBoundary => "regex word boundary",
            WordCountStrategy::ManualScan => "manual scan",
        }
    }

    /// Whether repeated or surrounding whitespace leaves the count unaffected.
    ///
    /// Only simple split is inflated by it.
    pub fn is_whitespace_aware(&self) -> bool {
        !matches!(self, WordCountStrategy::SimpleSplit)
    }

    /// Run this strategy on `text`
    pub fn count(&self, text: &str) -> Result<usize> {
        match self {
            WordCountStrategy::SimpleSplit => count_simple_split(text),
            WordCountStrategy::SplitRemoveEmpty => count_split_remove_empty(text),
            WordCountStrategy::RegexWordBoundary => count_regex_word_boundary(text),
            WordCountStrategy::ManualScan => count_manual_scan(text),
        }
    }
}

impl fmt::Display for WordCountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = " abc  def ghi ";

    #[test]
    fn test_sample_counts() {
        assert_eq!(count_simple_split(SAMPLE).unwrap(), 4);
        assert_eq!(count_split_remove_empty(SAMPLE).unwrap(), 3);
        assert_eq!(count_regex_word_boundary(SAMPLE).unwrap(), 3);
        assert_eq!(count_manual_scan(SAMPLE).unwrap(), 3);
    }

    #[test]
    fn test_blank_input_rejected() {
        for strategy in WordCountStrategy::ALL {
            for text in ["", "   ", "\t\n"] {
                assert!(
                    matches!(strategy.count(text), Err(KataError::InvalidArgument(_))),
                    "{strategy} accepted {text:?}"
                );
            }
            assert!(count_words(None, strategy).is_err());
        }
    }

    #[test]
    fn test_error_message() {
        let err = count_manual_scan("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: Input string cannot be null or empty."
        );
    }

    #[test]
    fn test_tabs_only_separate_for_whitespace_scans() {
        let text = "one\ttwo\nthree";
        assert_eq!(count_split_remove_empty(text).unwrap(), 1);
        assert_eq!(count_regex_word_boundary(text).unwrap(), 3);
        assert_eq!(count_manual_scan(text).unwrap(), 3);
    }

    #[test]
    fn test_punctuation_splits_regex_words() {
        let text = "don't stop-now";
        assert_eq!(count_regex_word_boundary(text).unwrap(), 4);
        assert_eq!(count_manual_scan(text).unwrap(), 2);
        assert_eq!(count_regex_word_boundary("snake_case id").unwrap(), 2);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(count_manual_scan("héllo wörld").unwrap(), 2);
        assert_eq!(count_regex_word_boundary("héllo wörld").unwrap(), 2);
    }

    #[test]
    fn test_whitespace_awareness() {
        assert!(!WordCountStrategy::SimpleSplit.is_whitespace_aware());
        assert!(WordCountStrategy::ALL[1..]
            .iter()
            .all(|s| s.is_whitespace_aware()));
    }
}
