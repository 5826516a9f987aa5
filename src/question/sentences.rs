use rand::seq::IndexedRandom;
use rand::Rng;

use crate::text_utils::{split_sentences, tokenize_words, NormalizedText};

/// Candidate sentence selection for fill-in-the-blank synthesis
///
/// Sentences qualify on word count and are sampled without replacement from
/// a caller-supplied random source, so one batch never blanks the same
/// sentence twice and tests can seed the sampling.
/// Default minimum word count for a sentence to qualify
pub const DEFAULT_MIN_CONTENT_WORDS: usize = 8;

/// Select up to `n` qualifying sentences from normalized text.
///
/// A sentence qualifies when its word count, under the same tokenization the
/// keyword ranker uses, exceeds `min_content_words`. Sampling is without
/// replacement; when fewer than `n` sentences qualify, all of them are
/// returned. Never an error.
pub fn select_sentences<R: Rng>(
    text: &NormalizedText,
    n: usize,
    min_content_words: usize,
    rng: &mut R,
) -> Vec<String> {
    let candidates: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|sentence| tokenize_words(sentence).len() > min_content_words)
        .collect();

    candidates
        .choose_multiple(rng, n.min(candidates.len()))
        .cloned()
        .collect()
}
