//! Error types for the Depot engine.

use crate::FamilyName;
use thiserror::Error;

/// All possible errors from the Depot engine.
///
/// Browsing (filter, sort, paginate) and code generation are total and
/// never produce these; they come from configuration and record validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Table configuration errors
    #[error("invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    // Schema errors
    #[error("record family not found: {0}")]
    FamilyNotFound(FamilyName),

    #[error("unknown field '{field}' in family '{family}'")]
    UnknownField { family: FamilyName, field: String },

    // Record validation errors
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("type mismatch for field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
