/*!
 * Error types for the docquiz application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

use crate::document_processor::DocumentFormat;

/// Errors that can occur when extracting text from documents
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Error when the document format is not in the known set
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Error when every extraction strategy for a format has failed.
    /// Partial or low-quality extraction is never reported here - that
    /// is a caller-side length check, not an error.
    #[error("Text extraction failed for {format} document: {details}")]
    ExtractionFailed {
        /// Format of the document that failed to extract
        format: DocumentFormat,
        /// Description of the last strategy failure
        details: String,
    },

    /// Error when the document file cannot be read
    #[error("Failed to read document: {0}")]
    ReadError(String),

    /// Error when the document exceeds the configured size limit
    #[error("Document is too large: {size} bytes (limit {limit})")]
    DocumentTooLarge {
        /// Actual document size in bytes
        size: u64,
        /// Configured maximum in bytes
        limit: u64,
    },
}

/// Errors that can occur when parsing a student roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Error when the roster file extension is not CSV or Excel
    #[error("Unsupported roster format: {0}")]
    UnsupportedFormat(String),

    /// Error when the required username column is missing
    #[error("Roster is missing the required '{0}' column")]
    MissingColumn(String),

    /// Error when the roster file cannot be read or parsed
    #[error("Failed to parse roster: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document text extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from roster parsing
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// Error from configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
