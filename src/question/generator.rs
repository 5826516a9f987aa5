/*!
 * Generation orchestrator aggregating the four question synthesizers.
 *
 * The orchestrator normalizes the input text once, invokes each synthesizer
 * independently over it, and aggregates the results. It holds no mutable
 * state of its own: the caller-supplied random source is the only
 * non-determinism, so two calls with the same text, config and seed produce
 * identical results.
 */

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::question::fill_blank::generate_fill_blank;
use crate::question::model::GenerationResult;
use crate::question::multiple_choice::generate_multiple_choice;
use crate::question::reading::generate_reading_comprehension;
use crate::question::vocabulary::generate_vocabulary;
use crate::text_utils::{normalize, NormalizedText};

/// Requested question counts per type.
///
/// Unknown keys in a supplied config are ignored and missing keys count as
/// zero. The documented defaults (5/5/5/3) apply only when no config is
/// given at all, via [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Vocabulary questions to generate
    #[serde(default)]
    pub vocabulary: usize,

    /// Fill-in-the-blank questions to generate
    #[serde(default)]
    pub fill_blank: usize,

    /// Multiple choice questions to generate
    #[serde(default)]
    pub multiple_choice: usize,

    /// Reading comprehension questions to generate
    #[serde(default)]
    pub reading_comprehension: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            vocabulary: 5,
            fill_blank: 5,
            multiple_choice: 5,
            reading_comprehension: 3,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration with explicit counts per question type
    pub fn new(
        vocabulary: usize,
        fill_blank: usize,
        multiple_choice: usize,
        reading_comprehension: usize,
    ) -> Self {
        Self {
            vocabulary,
            fill_blank,
            multiple_choice,
            reading_comprehension,
        }
    }

    /// A configuration requesting no questions at all
    pub fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Total number of questions requested
    pub fn total_requested(&self) -> usize {
        self.vocabulary + self.fill_blank + self.multiple_choice + self.reading_comprehension
    }

    /// Set the vocabulary count
    pub fn with_vocabulary(mut self, count: usize) -> Self {
        self.vocabulary = count;
        self
    }

    /// Set the fill-blank count
    pub fn with_fill_blank(mut self, count: usize) -> Self {
        self.fill_blank = count;
        self
    }

    /// Set the multiple-choice count
    pub fn with_multiple_choice(mut self, count: usize) -> Self {
        self.multiple_choice = count;
        self
    }

    /// Set the reading-comprehension count
    pub fn with_reading_comprehension(mut self, count: usize) -> Self {
        self.reading_comprehension = count;
        self
    }
}

/// Question generator orchestrating the four synthesizers
#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator {
    config: GenerationConfig,
}

impl QuestionGenerator {
    /// Create a generator with the documented default counts (5/5/5/3)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with an explicit configuration
    pub fn with_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate all question types from raw text using the given random
    /// source.
    ///
    /// The text is normalized once; the synthesizers share only that
    /// read-only text and the random source. Empty or degenerate input
    /// yields empty sequences for every type.
    pub fn generate_all<R: Rng>(&self, text: &str, rng: &mut R) -> GenerationResult {
        let normalized = normalize(text);
        self.generate_from_normalized(&normalized, rng)
    }

    /// Generate all question types from already-normalized text
    pub fn generate_from_normalized<R: Rng>(
        &self,
        text: &NormalizedText,
        rng: &mut R,
    ) -> GenerationResult {
        let start_time = Instant::now();

        let result = GenerationResult {
            vocabulary: generate_vocabulary(text, self.config.vocabulary),
            fill_blank: generate_fill_blank(text, self.config.fill_blank, rng),
            multiple_choice: generate_multiple_choice(text, self.config.multiple_choice, rng),
            reading_comprehension: generate_reading_comprehension(
                text,
                self.config.reading_comprehension,
            ),
        };

        debug!(
            "Generated {}/{} questions in {:?}",
            result.total(),
            self.config.total_requested(),
            start_time.elapsed()
        );

        result
    }

    /// Generate all question types with a seeded random source, for
    /// reproducible output
    pub fn generate_with_seed(&self, text: &str, seed: u64) -> GenerationResult {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_all(text, &mut rng)
    }
}

/// Generate all question types from raw text with the default counts and
/// the given random source
pub fn generate_all<R: Rng>(text: &str, rng: &mut R) -> GenerationResult {
    QuestionGenerator::new().generate_all(text, rng)
}
