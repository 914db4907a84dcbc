use thiserror::Error;

/// Error for MovieName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieNameError {
    #[error("Movie name must not be empty")]
    Empty,

    #[error("Movie name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Classification parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("Unknown classification: {0}")]
    Unknown(String),
}

/// Top-level error for all movie operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid movie name: {0}")]
    InvalidName(#[from] MovieNameError),

    #[error("Invalid classification: {0}")]
    InvalidClassification(#[from] ClassificationError),

    #[error("Movie not found: {0}")]
    NotFound(i32),

    #[error("Movie already exists: {0}")]
    AlreadyExists(String),

    /// The referenced category does not exist (foreign key miss).
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
