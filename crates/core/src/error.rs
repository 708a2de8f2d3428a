//! Error types for faqbot.
//!
//! A single error enum covers configuration, I/O, store, and import failures.
//! Messages are human-readable because they end up in front of the user as-is.

use thiserror::Error;

/// Unified error type for faqbot.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persistence layer errors (open, write, query)
    #[error("Store error: {0}")]
    Store(String),

    /// Spreadsheet reading and bulk import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Rejected input (empty question or response)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
