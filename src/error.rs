//! Error types for signal vocabularies

use thiserror::Error;

/// Failure building a matrix, naming a subject, or growing a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// A member list passed to matrix construction was empty
    #[error("category {0} has no members")]
    EmptyCategory(&'static str),

    /// A member list did not cover every member of its category
    #[error("category {category}: expected {expected} members, got {actual}")]
    IncompleteCategory {
        category: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A member list was not in ordinal order
    #[error("category {category}: member at position {position} has ordinal {ordinal}")]
    OrdinalMismatch {
        category: &'static str,
        position: usize,
        ordinal: usize,
    },

    /// Subject name failed validation
    #[error("invalid subject name {name:?}: {reason}")]
    InvalidSubject { name: String, reason: &'static str },

    /// Registry reached its configured subject limit
    #[error("registry full: limit of {0} subjects reached")]
    RegistryFull(usize),

    /// Configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

/// Failure reported by a sink. Instruments hand it back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The receiving side is gone
    #[error("sink closed")]
    Closed,

    /// The sink refused the value
    #[error("sink rejected value: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, VocabError>;
