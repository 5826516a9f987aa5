use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Question records produced by the synthesizers
///
/// Every generated question is one of four variants, serialized with an
/// explicit `type` tag so downstream consumers can route on it.
/// Question difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy question
    Easy,
    /// Medium question - the only level the heuristic synthesizers emit
    #[default]
    Medium,
    /// Hard question
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// The four recognized question types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Vocabulary definition question
    Vocabulary,
    /// Fill-in-the-blank question
    FillBlank,
    /// Multiple choice question
    MultipleChoice,
    /// Reading comprehension question
    ReadingComprehension,
}

impl QuestionKind {
    /// All recognized kinds, in generation order
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::Vocabulary,
        QuestionKind::FillBlank,
        QuestionKind::MultipleChoice,
        QuestionKind::ReadingComprehension,
    ];

    // @returns: Snake-case identifier used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::FillBlank => "fill_blank",
            Self::MultipleChoice => "multiple_choice",
            Self::ReadingComprehension => "reading_comprehension",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vocabulary" => Ok(Self::Vocabulary),
            "fill_blank" => Ok(Self::FillBlank),
            "multiple_choice" => Ok(Self::MultipleChoice),
            "reading_comprehension" => Ok(Self::ReadingComprehension),
            _ => Err(anyhow!("Unknown question type: {}", s)),
        }
    }
}

/// A single generated question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Vocabulary definition question anchored on a ranked keyword.
    /// No definition content is generated - the prompt only references
    /// the keyword.
    Vocabulary {
        /// Question text shown to the student
        prompt: String,
        /// The keyword the question asks about
        keyword: String,
        /// Difficulty rating
        difficulty: Difficulty,
    },

    /// Fill-in-the-blank question built from a sampled sentence
    FillBlank {
        /// The sentence with one content word replaced by the blank marker
        prompt: String,
        /// The word that was blanked out
        answer: String,
        /// The sentence verbatim, for answer checking and display
        original_sentence: String,
    },

    /// Multiple choice question with exactly four distinct options
    MultipleChoice {
        /// Question text shown to the student
        prompt: String,
        /// The four options, shuffled
        options: Vec<String>,
        /// The correct option - always a member of `options`
        correct: String,
        /// Difficulty rating
        difficulty: Difficulty,
    },

    /// Reading comprehension question referencing a source sentence
    ReadingComprehension {
        /// Question text shown to the student
        prompt: String,
        /// First 100 characters of the source sentence, ellipsis appended
        reference_sentence: String,
        /// Difficulty rating
        difficulty: Difficulty,
    },
}

impl Question {
    // @returns: The kind tag of this question
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Vocabulary { .. } => QuestionKind::Vocabulary,
            Self::FillBlank { .. } => QuestionKind::FillBlank,
            Self::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Self::ReadingComprehension { .. } => QuestionKind::ReadingComprehension,
        }
    }

    /// The prompt text, regardless of variant
    pub fn prompt(&self) -> &str {
        match self {
            Self::Vocabulary { prompt, .. }
            | Self::FillBlank { prompt, .. }
            | Self::MultipleChoice { prompt, .. }
            | Self::ReadingComprehension { prompt, .. } => prompt,
        }
    }
}

/// Aggregated output of one generation call.
///
/// One ordered sequence per question type. Each sequence holds at most the
/// requested count - fewer when the source text lacks enough distinct
/// keywords or sentences (under-fill, not an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Vocabulary definition questions
    pub vocabulary: Vec<Question>,

    /// Fill-in-the-blank questions
    pub fill_blank: Vec<Question>,

    /// Multiple choice questions
    pub multiple_choice: Vec<Question>,

    /// Reading comprehension questions
    pub reading_comprehension: Vec<Question>,
}

impl GenerationResult {
    /// Total number of questions across all types
    pub fn total(&self) -> usize {
        self.vocabulary.len()
            + self.fill_blank.len()
            + self.multiple_choice.len()
            + self.reading_comprehension.len()
    }

    /// Whether no questions were generated at all
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Questions of one type, for uniform consumption by callers
    pub fn of_kind(&self, kind: QuestionKind) -> &[Question] {
        match kind {
            QuestionKind::Vocabulary => &self.vocabulary,
            QuestionKind::FillBlank => &self.fill_blank,
            QuestionKind::MultipleChoice => &self.multiple_choice,
            QuestionKind::ReadingComprehension => &self.reading_comprehension,
        }
    }

    /// Iterate over every generated question in generation order
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        QuestionKind::ALL
            .iter()
            .flat_map(|kind| self.of_kind(*kind).iter())
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation Result")?;
        writeln!(f, "Vocabulary: {}", self.vocabulary.len())?;
        writeln!(f, "Fill-blank: {}", self.fill_blank.len())?;
        writeln!(f, "Multiple choice: {}", self.multiple_choice.len())?;
        writeln!(f, "Reading comprehension: {}", self.reading_comprehension.len())?;
        Ok(())
    }
}
