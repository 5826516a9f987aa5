use crate::question::keywords::rank_keywords;
use crate::question::model::{Difficulty, Question};
use crate::text_utils::NormalizedText;

/// Vocabulary-definition question synthesizer
///
/// Asks for the meaning of the highest-ranked keywords. No dictionary
/// lookup happens here - the prompt only references the keyword, and
/// definition content is supplied by whoever grades the answer.
/// Generate up to `count` vocabulary questions from normalized text.
///
/// Ranks the top `2 * count` keywords and emits one question for each of
/// the first `count`. Under-fills when the text has fewer distinct
/// keywords.
pub fn generate_vocabulary(text: &NormalizedText, count: usize) -> Vec<Question> {
    let keywords = rank_keywords(text, count * 2);

    keywords
        .into_iter()
        .take(count)
        .map(|keyword| Question::Vocabulary {
            prompt: format!("What is the meaning of \"{}\"?", keyword.term),
            keyword: keyword.term,
            difficulty: Difficulty::Medium,
        })
        .collect()
}
