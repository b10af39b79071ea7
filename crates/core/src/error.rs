//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised before any state is touched, so a caller that sees
/// an error can assume the registry it called is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was absent.
    #[error("argument cannot be null: {0}")]
    ArgumentNull(&'static str),

    /// A product had no name (or an empty one) at validation time.
    #[error("name is required")]
    NameRequired,

    /// A handle did not refer to anything in the registry it was used with.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn argument_null(argument: &'static str) -> Self {
        Self::ArgumentNull(argument)
    }

    pub fn name_required() -> Self {
        Self::NameRequired
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
