use rand::seq::IndexedRandom;
use rand::Rng;

use crate::question::model::Question;
use crate::question::sentences::{select_sentences, DEFAULT_MIN_CONTENT_WORDS};
use crate::text_utils::{tokenize_surface_words, NormalizedText};

/// Fill-in-the-blank question synthesizer
///
/// Samples qualifying sentences, blanks one content word per sentence and
/// keeps the original sentence for answer checking.
/// Marker substituted for the blanked word
pub const BLANK_MARKER: &str = "_____";

/// Minimum length for a word to be eligible for blanking. Stopwords stay
/// eligible here - length is the only filter.
const MIN_BLANK_WORD_LEN: usize = 4;

/// Generate up to `count` fill-in-the-blank questions from normalized text.
///
/// Each sampled sentence contributes at most one question. The blanked word
/// is chosen uniformly at random among the sentence's alphabetic words
/// longer than three characters, and only its first textual occurrence is
/// replaced so the question keeps a single answer position. Sentences with
/// no eligible word are skipped silently - the batch under-fills instead of
/// erroring.
pub fn generate_fill_blank<R: Rng>(
    text: &NormalizedText,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let selected = select_sentences(text, count, DEFAULT_MIN_CONTENT_WORDS, rng);

    let mut questions = Vec::with_capacity(selected.len());
    for sentence in selected {
        let content_words: Vec<String> = tokenize_surface_words(&sentence)
            .into_iter()
            .filter(|word| word.len() >= MIN_BLANK_WORD_LEN)
            .collect();

        let Some(blank_word) = content_words.choose(rng) else {
            continue;
        };

        let prompt = sentence.replacen(blank_word.as_str(), BLANK_MARKER, 1);
        questions.push(Question::FillBlank {
            prompt,
            answer: blank_word.clone(),
            original_sentence: sentence,
        });
    }

    questions
}
