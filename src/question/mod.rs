/*!
 * Question synthesis from normalized document text.
 *
 * This module contains the core functionality for turning extracted lecture
 * text into graded quiz items. It is split into several submodules:
 *
 * - `model`: Question records and the aggregated generation result
 * - `keywords`: Frequency-ranked keyword extraction with deterministic ties
 * - `sentences`: Candidate sentence selection with seedable sampling
 * - `vocabulary`: Vocabulary-definition question synthesizer
 * - `fill_blank`: Fill-in-the-blank question synthesizer
 * - `multiple_choice`: Multiple-choice question synthesizer
 * - `reading`: Reading-comprehension question synthesizer
 * - `generator`: Orchestrator aggregating the four synthesizers
 */

// Re-export main types for easier usage
pub use self::generator::{GenerationConfig, QuestionGenerator};
pub use self::keywords::{rank_keywords, Keyword};
pub use self::model::{Difficulty, GenerationResult, Question, QuestionKind};
pub use self::sentences::select_sentences;

// Submodules
pub mod fill_blank;
pub mod generator;
pub mod keywords;
pub mod model;
pub mod multiple_choice;
pub mod reading;
pub mod sentences;
pub mod vocabulary;
