use thiserror::Error;

use crate::domain::validation::FieldViolation;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    /// One or more request fields failed validation. Every violation is
    /// carried so the client sees them all at once.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Book not found")]
    NotFound(String),

    /// Authenticated requester is not the owner of the record.
    #[error("{0}")]
    Forbidden(String),

    // Infrastructure errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for BookError {
    fn from(err: anyhow::Error) -> Self {
        BookError::Unknown(err.to_string())
    }
}
