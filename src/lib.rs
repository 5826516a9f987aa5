/*!
 * # docquiz - Document-to-Quiz Generation
 *
 * A Rust library for generating quiz questions from lecture documents.
 *
 * ## Features
 *
 * - Extract plain text from PDF, Word (.docx) and PowerPoint (.pptx) files
 * - Normalize lossy extracted text into clean prose
 * - Rank keywords deterministically by frequency
 * - Generate four question types from the same source text:
 *   - Vocabulary definition
 *   - Fill-in-the-blank
 *   - Multiple choice
 *   - Reading comprehension
 * - Seedable randomness for reproducible generation
 * - Parse student rosters from CSV and Excel files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_processor`: Document format handling and text extraction
 * - `text_utils`: Text normalization, tokenization and sentence splitting
 * - `question`: Question synthesis from normalized text:
 *   - `question::keywords`: Frequency-ranked keyword extraction
 *   - `question::sentences`: Candidate sentence selection
 *   - `question::vocabulary`, `question::fill_blank`,
 *     `question::multiple_choice`, `question::reading`: the four synthesizers
 *   - `question::generator`: Generation orchestrator
 * - `roster`: Student roster parsing
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document_processor;
pub mod errors;
pub mod question;
pub mod roster;
pub mod text_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document_processor::{DocumentFormat, ExtractedDocument};
pub use errors::{AppError, ExtractionError, RosterError};
pub use question::{
    GenerationConfig, GenerationResult, Question, QuestionGenerator, QuestionKind,
};
pub use text_utils::{normalize, NormalizedText};
