//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity or value object failed validation. The message is the stable,
    /// per-rule reason (e.g. `"Id is required"`).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested entity was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A collaborator contract is not fulfilled by an adapter yet.
    ///
    /// This is a development-time signal, distinct from validation failures.
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn unimplemented(what: &'static str) -> Self {
        Self::Unimplemented(what)
    }
}
