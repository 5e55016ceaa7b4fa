use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller input violates a business rule.
    #[error("{message}")]
    Validation { message: String },

    /// No user row matches the given id.
    #[error("user not found: {id}")]
    NotFound { id: String },

    /// Backing store failure (connectivity, constraint violation).
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
