use crate::question::model::{Difficulty, Question};
use crate::text_utils::{split_sentences, truncate_chars, NormalizedText};

/// Reading-comprehension question synthesizer
///
/// Takes sentences in document order - no ranking, no sampling - on the
/// assumption that the opening sentences carry the main ideas of academic
/// prose.
/// Maximum characters of the source sentence carried into the reference
const REFERENCE_MAX_CHARS: usize = 100;

/// Generate up to `count` reading-comprehension questions from normalized
/// text.
///
/// Sentence-tokenizes the full text without any length filter and emits one
/// question per sentence for the first `count` sentences. The reference is
/// the sentence truncated to 100 characters with `...` appended - the
/// ellipsis is appended even when nothing was truncated, which downstream
/// display code relies on.
pub fn generate_reading_comprehension(text: &NormalizedText, count: usize) -> Vec<Question> {
    split_sentences(text)
        .into_iter()
        .take(count)
        .map(|sentence| Question::ReadingComprehension {
            prompt: "According to the text, what is the main idea?".to_string(),
            reference_sentence: format!("{}...", truncate_chars(&sentence, REFERENCE_MAX_CHARS)),
            difficulty: Difficulty::Medium,
        })
        .collect()
}
