use rand::seq::SliceRandom;
use rand::Rng;

use crate::question::keywords::rank_keywords;
use crate::question::model::{Difficulty, Question};
use crate::text_utils::NormalizedText;

/// Multiple-choice question synthesizer
///
/// Distractors are other ranked keywords from the same corpus, not
/// semantically related wrong answers. This is a deliberate knowledge-free
/// heuristic and callers should not expect more than surface plausibility.
/// Number of wrong answers accompanying the correct keyword
const DISTRACTOR_COUNT: usize = 3;

/// Minimum length for a keyword to serve as a distractor
const MIN_DISTRACTOR_LEN: usize = 4;

/// Generate up to `count` multiple-choice questions from normalized text.
///
/// Ranks the top `3 * count` keywords; each of the first `count` becomes
/// the correct answer of one question. Distractors are collected from the
/// ranked list in order, skipping the correct term, and padded with
/// `distractor_<index>` placeholders when the pool runs dry, so every
/// question carries exactly four distinct options. The option order is
/// shuffled with the caller's random source.
pub fn generate_multiple_choice<R: Rng>(
    text: &NormalizedText,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let keywords = rank_keywords(text, count * 3);
    let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();

    let mut questions = Vec::with_capacity(count.min(terms.len()));
    for correct in terms.iter().take(count) {
        let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);
        for term in &terms {
            if term != correct && term.len() >= MIN_DISTRACTOR_LEN {
                distractors.push((*term).to_string());
                if distractors.len() >= DISTRACTOR_COUNT {
                    break;
                }
            }
        }

        // Known degenerate fallback: synthetic placeholders when the corpus
        // has fewer than four distinct keywords
        while distractors.len() < DISTRACTOR_COUNT {
            distractors.push(format!("distractor_{}", distractors.len()));
        }

        let mut options: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT + 1);
        options.push((*correct).to_string());
        options.extend(distractors);
        options.shuffle(rng);

        questions.push(Question::MultipleChoice {
            prompt: "Which word best fits the context?".to_string(),
            options,
            correct: (*correct).to_string(),
            difficulty: Difficulty::Medium,
        });
    }

    questions
}
