use std::fmt;
use std::ops::Deref;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Text utilities shared by the extraction and question generation stages
///
/// This module provides the normalization applied to every extracted
/// document, plus the word tokenizer and sentence splitter that the
/// keyword ranker and the question synthesizers agree on.
// @const: Any run of whitespace
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// @const: Characters outside the linguistic set we keep
static NON_LINGUISTIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^A-Za-z0-9 .,!?;:'"-]"#).unwrap()
});

/// Normalized document text.
///
/// Produced by [`normalize`] and never mutated afterwards: whitespace is
/// collapsed to single spaces, characters outside `[A-Za-z0-9 .,!?;:'"-]`
/// are removed, and leading/trailing space is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Borrow the normalized text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count of the normalized text
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the normalized text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize raw extracted text.
///
/// Pure and total: always returns a (possibly empty) string, never an error.
/// Collapses whitespace runs, strips non-linguistic characters while keeping
/// sentence punctuation, and trims the result.
pub fn normalize(raw: &str) -> NormalizedText {
    let collapsed = WHITESPACE_REGEX.replace_all(raw, " ");
    let stripped = NON_LINGUISTIC_REGEX.replace_all(&collapsed, " ");
    let recollapsed = WHITESPACE_REGEX.replace_all(&stripped, " ");
    NormalizedText(recollapsed.trim().to_string())
}

/// Tokenize text into lowercase alphabetic word runs.
///
/// This is the single tokenization used by the keyword ranker, the sentence
/// length filter, and the fill-blank word picker, so all three agree on what
/// a word is. Digits and punctuation act as separators.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Tokenize a sentence into its surface word forms, case preserved.
///
/// Used by the fill-blank synthesizer, which must blank the word exactly as
/// it appears in the sentence.
pub fn tokenize_surface_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Split text into sentences on `.`, `!` and `?` boundaries.
///
/// Naive punctuation splitting - the corpus is academic prose, so
/// abbreviation awareness is not required. Runs of terminators (`...`, `?!`)
/// stay attached to the sentence they end. A trailing fragment without a
/// terminator counts as a sentence too.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut in_terminator = false;

    for c in text.chars() {
        let is_terminator = matches!(c, '.' | '!' | '?');

        if in_terminator && !is_terminator {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }

        current.push(c);
        in_terminator = is_terminator;
    }

    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }

    sentences
}

/// Truncate a string to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
