use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::text_utils::{tokenize_words, NormalizedText};

/// Keyword ranking for question synthesis
///
/// Tokenizes normalized text, drops stopwords and short tokens, and ranks
/// the remaining terms by frequency. Ties are broken by the order of first
/// appearance in the text so repeated calls on identical input always
/// produce the same ordering.
/// Minimum keyword length. Shorter tokens carry too little meaning to
/// anchor a question on.
pub const MIN_KEYWORD_LEN: usize = 4;

// @const: Closed English stopword list shared by ranking and distractors
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "of", "to", "in", "on", "at",
        "for", "from", "with", "without", "into", "onto", "is", "are", "was", "were", "be",
        "been", "being", "i", "you", "he", "she", "it", "we", "they", "this", "that",
        "these", "those", "as", "by", "about", "have", "has", "had", "do", "does", "did",
        "will", "would", "shall", "should", "can", "could", "may", "might", "must", "not",
        "no", "nor", "so", "too", "very", "there", "their", "them", "his", "her", "its",
        "our", "your", "my", "me", "him", "us", "who", "whom", "whose", "which", "what",
        "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most",
        "other", "some", "such", "only", "own", "same", "than", "also", "just", "because",
        "while", "during", "before", "after", "again", "once", "here", "out", "up", "down",
    ]
    .into_iter()
    .collect()
});

/// A frequency-ranked content word extracted from source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// Lowercase alphabetic term, at least four characters
    pub term: String,

    /// Number of occurrences in the source text
    pub frequency: usize,
}

/// Whether a token is in the closed stopword list
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Extract the top `top_k` keywords from normalized text.
///
/// Tokens are lowercase alphabetic runs; stopwords and tokens shorter than
/// [`MIN_KEYWORD_LEN`] are discarded before counting. The result is sorted
/// by descending frequency, with equal frequencies ordered by first
/// appearance in the text. Total function - degenerate input yields an
/// empty vector, never an error.
pub fn rank_keywords(text: &NormalizedText, top_k: usize) -> Vec<Keyword> {
    let words = tokenize_words(text);

    // (count, first-seen index) per eligible term
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, word) in words.into_iter().enumerate() {
        if word.len() < MIN_KEYWORD_LEN || is_stopword(&word) {
            continue;
        }
        counts
            .entry(word)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, index));
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first_seen))| (term, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_k);

    ranked
        .into_iter()
        .map(|(term, frequency, _)| Keyword { term, frequency })
        .collect()
}
