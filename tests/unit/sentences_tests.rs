/*!
 * Tests for candidate sentence selection
 */

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use docquiz::question::sentences::select_sentences;
use docquiz::text_utils::normalize;

use crate::common;

/// Test that qualifying sentences are all returned when fewer than n exist
#[test]
fn test_select_sentences_withFewerQualifyingThanRequested_shouldReturnAllQualifying() {
    let text = normalize(common::FOX_TEXT);
    let mut rng = StdRng::seed_from_u64(7);

    let selected = select_sentences(&text, 5, 8, &mut rng);

    // Both sentences have more than eight words
    assert_eq!(selected.len(), 2);
    let set: HashSet<&str> = selected.iter().map(|s| s.as_str()).collect();
    assert!(set.contains("The quick brown fox jumps over the lazy dog."));
    assert!(set.contains("The dog barks loudly at the fox every single morning."));
}

/// Test the word-count qualification filter
#[test]
fn test_select_sentences_withShortSentences_shouldFilterThemOut() {
    let text = normalize("Too short. Also brief. The dog barks loudly at the fox every single morning.");
    let mut rng = StdRng::seed_from_u64(7);

    let selected = select_sentences(&text, 5, 8, &mut rng);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0], "The dog barks loudly at the fox every single morning.");
}

/// Test sampling without replacement
#[test]
fn test_select_sentences_withManyDraws_shouldNeverRepeatASentence() {
    let text = normalize(common::LECTURE_TEXT);
    let mut rng = StdRng::seed_from_u64(99);

    let selected = select_sentences(&text, 4, 5, &mut rng);

    let distinct: HashSet<&str> = selected.iter().map(|s| s.as_str()).collect();
    assert_eq!(distinct.len(), selected.len());
}

/// Test that an empty text yields no sentences rather than an error
#[test]
fn test_select_sentences_withEmptyText_shouldReturnEmpty() {
    let text = normalize("");
    let mut rng = StdRng::seed_from_u64(1);

    assert!(select_sentences(&text, 3, 8, &mut rng).is_empty());
}

/// Test reproducibility under an identical seed
#[test]
fn test_select_sentences_withSameSeed_shouldReturnSameSample() {
    let text = normalize(common::LECTURE_TEXT);

    let mut first_rng = StdRng::seed_from_u64(1234);
    let mut second_rng = StdRng::seed_from_u64(1234);

    let first = select_sentences(&text, 2, 5, &mut first_rng);
    let second = select_sentences(&text, 2, 5, &mut second_rng);

    assert_eq!(first, second);
}
