//! Error types for Shelfmark Core

use crate::record::Record;
use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelfmark operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected field updates on a single record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("price must be greater than zero, got {0}")]
    InvalidPrice(f64),

    #[error("year must be between 1 and {max}, got {year}")]
    InvalidYear { year: i32, max: i32 },
}

/// Errors raised by catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The record was not inserted; it is handed back to the caller.
    #[error("catalog is full (capacity {capacity})")]
    Full { capacity: usize, record: Box<Record> },

    #[error("no record with identifier {0}")]
    NotFound(String),

    #[error("no title contains \"{0}\"")]
    NoTitleMatch(String),

    #[error("record {0} is already borrowed")]
    AlreadyBorrowed(String),

    #[error("record {0} is not borrowed")]
    NotBorrowed(String),
}

impl CatalogError {
    /// Recover the record from a rejected insertion
    pub fn into_record(self) -> Option<Record> {
        match self {
            CatalogError::Full { record, .. } => Some(*record),
            _ => None,
        }
    }
}

/// Errors that occur while building configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),
}
