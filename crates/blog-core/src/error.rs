//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
///
/// The `Display` output of each variant is the exact message returned to
/// API clients.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn author_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "Author",
            id: id.into(),
        }
    }

    pub fn post_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id: id.into(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        // The services check existence under the write gate before touching
        // the store, so any repository failure here is unexpected.
        DomainError::Internal(err.to_string())
    }
}
