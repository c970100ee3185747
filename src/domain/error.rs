//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the domain forest's structure.
/// Selection and tri-state logic never produce them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain id must not be empty (child of {parent:?})")]
    EmptyId { parent: Option<String> },

    #[error("duplicate domain id: {0}")]
    DuplicateId(String),

    #[error("default-enabled domain not in catalog: {0}")]
    UnknownDefault(String),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
