//! Error types for catalog loading and game operations.
//!
//! Nothing here is transient: every error is either unusable input
//! (`CatalogError`, `GameError::EmptyCatalog`) or caller misuse
//! (`GameError::InvalidPhase`, `GameError::InvalidPlayerCount`).
//! Ties and missing attribute values are outcomes, not errors.

use thiserror::Error;

use crate::game::Phase;

/// Failure while reading or validating a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A record lacks one of the identity fields (`id`, `name`, `attributes`).
    #[error("card record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("card id `{0}` appears more than once")]
    DuplicateId(String),
}

/// Failure of an engine operation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("catalog has no cards to deal")]
    EmptyCatalog,

    #[error("player count must be 2-4, got {0}")]
    InvalidPlayerCount(usize),

    /// Operation called in the wrong phase. State is left unchanged.
    #[error("`{operation}` requires phase {expected}, but game is in {actual}")]
    InvalidPhase {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },
}
