/*!
 * Tests for the four question synthesizers
 */

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use docquiz::question::fill_blank::{generate_fill_blank, BLANK_MARKER};
use docquiz::question::multiple_choice::generate_multiple_choice;
use docquiz::question::reading::generate_reading_comprehension;
use docquiz::question::vocabulary::generate_vocabulary;
use docquiz::question::{Difficulty, Question};
use docquiz::text_utils::normalize;

use crate::common;

/// Test vocabulary prompts reference the ranked keyword
#[test]
fn test_generate_vocabulary_withValidText_shouldReferenceRankedKeywords() {
    let text = normalize(common::FOX_TEXT);

    let questions = generate_vocabulary(&text, 1);

    assert_eq!(questions.len(), 1);
    let Question::Vocabulary { prompt, keyword, difficulty } = &questions[0] else {
        panic!("expected a vocabulary question");
    };
    // Highest-ranked keyword of the fox corpus is "quick"
    assert_eq!(keyword, "quick");
    assert_eq!(prompt, "What is the meaning of \"quick\"?");
    assert_eq!(*difficulty, Difficulty::Medium);
}

/// Test vocabulary under-fill when the corpus has too few keywords
#[test]
fn test_generate_vocabulary_withTwoEligibleKeywords_shouldUnderFill() {
    let text = normalize("Wombat wombat wombat tiny wombat tiny.");

    let questions = generate_vocabulary(&text, 5);

    assert!(questions.len() <= 2);
    assert!(!questions.is_empty());
}

/// Test the fill-blank round-trip property
#[test]
fn test_generate_fill_blank_withValidText_shouldRoundTripThroughTheBlank() {
    let text = normalize(common::LECTURE_TEXT);
    let mut rng = StdRng::seed_from_u64(21);

    let questions = generate_fill_blank(&text, 3, &mut rng);

    assert!(!questions.is_empty());
    for question in &questions {
        let Question::FillBlank { prompt, answer, original_sentence } = question else {
            panic!("expected a fill-blank question");
        };

        // Exactly one blank marker
        assert_eq!(prompt.matches(BLANK_MARKER).count(), 1);
        // Replacing the marker with the answer reproduces the sentence
        assert_eq!(&prompt.replacen(BLANK_MARKER, answer, 1), original_sentence);
        // The blanked word is a content word
        assert!(answer.len() > 3);
    }
}

/// Test that only the first occurrence of a repeated word is blanked
#[test]
fn test_generate_fill_blank_withRepeatedBlankWord_shouldBlankFirstOccurrenceOnly() {
    // Every eligible content word is "wombat", repeated across the sentence
    let text = normalize("The wombat saw the wombat and the wombat ran far off now.");
    let mut rng = StdRng::seed_from_u64(3);

    let questions = generate_fill_blank(&text, 1, &mut rng);

    assert_eq!(questions.len(), 1);
    let Question::FillBlank { prompt, answer, .. } = &questions[0] else {
        panic!("expected a fill-blank question");
    };
    assert_eq!(answer, "wombat");
    assert!(prompt.starts_with("The _____ saw the wombat"));
    assert_eq!(prompt.matches("wombat").count(), 2);
}

/// Test that sentences without eligible words are skipped silently
#[test]
fn test_generate_fill_blank_withNoContentWords_shouldSkipSentence() {
    // More than eight words, but none longer than three characters
    let text = normalize("He is it an ox as we go by far up now.");
    let mut rng = StdRng::seed_from_u64(5);

    let questions = generate_fill_blank(&text, 3, &mut rng);

    assert!(questions.is_empty());
}

/// Test multiple-choice option structure
#[test]
fn test_generate_multiple_choice_withRichText_shouldEmitFourDistinctOptions() {
    let text = normalize(common::LECTURE_TEXT);
    let mut rng = StdRng::seed_from_u64(8);

    let questions = generate_multiple_choice(&text, 3, &mut rng);

    assert_eq!(questions.len(), 3);
    for question in &questions {
        let Question::MultipleChoice { prompt, options, correct, .. } = question else {
            panic!("expected a multiple-choice question");
        };

        assert_eq!(prompt, "Which word best fits the context?");
        assert_eq!(options.len(), 4);
        let distinct: HashSet<&str> = options.iter().map(|o| o.as_str()).collect();
        assert_eq!(distinct.len(), 4);
        assert!(options.contains(correct));
    }
}

/// Test the placeholder padding fallback when keywords run out
#[test]
fn test_generate_multiple_choice_withTinyKeywordPool_shouldPadWithPlaceholders() {
    let text = normalize("Wombat wombat wombat. Tiny cat sat.");
    let mut rng = StdRng::seed_from_u64(8);

    let questions = generate_multiple_choice(&text, 1, &mut rng);

    assert_eq!(questions.len(), 1);
    let Question::MultipleChoice { options, correct, .. } = &questions[0] else {
        panic!("expected a multiple-choice question");
    };

    assert_eq!(correct, "wombat");
    assert!(options.contains(&"tiny".to_string()));
    assert!(options.contains(&"distractor_1".to_string()));
    assert!(options.contains(&"distractor_2".to_string()));
}

/// Test reading-comprehension questions take sentences in document order
#[test]
fn test_generate_reading_comprehension_withValidText_shouldUseFirstSentences() {
    let text = normalize(common::FOX_TEXT);

    let questions = generate_reading_comprehension(&text, 1);

    assert_eq!(questions.len(), 1);
    let Question::ReadingComprehension { prompt, reference_sentence, .. } = &questions[0] else {
        panic!("expected a reading-comprehension question");
    };
    assert_eq!(prompt, "According to the text, what is the main idea?");
    assert!(reference_sentence.starts_with("The quick brown fox"));
}

/// Known quirk: the ellipsis is appended even when nothing was truncated.
/// Kept for output parity with existing consumers.
#[test]
fn test_generate_reading_comprehension_withShortSentence_shouldStillAppendEllipsis() {
    let text = normalize("Short sentence here. Another one follows.");

    let questions = generate_reading_comprehension(&text, 2);

    assert_eq!(questions.len(), 2);
    let Question::ReadingComprehension { reference_sentence, .. } = &questions[0] else {
        panic!("expected a reading-comprehension question");
    };
    assert_eq!(reference_sentence, "Short sentence here....");
}

/// Test reference truncation for long sentences
#[test]
fn test_generate_reading_comprehension_withLongSentence_shouldTruncateToHundredChars() {
    let long_sentence = format!("{} end.", "word ".repeat(40));
    let text = normalize(&long_sentence);

    let questions = generate_reading_comprehension(&text, 1);

    let Question::ReadingComprehension { reference_sentence, .. } = &questions[0] else {
        panic!("expected a reading-comprehension question");
    };
    assert_eq!(reference_sentence.chars().count(), 103);
    assert!(reference_sentence.ends_with("..."));
}
