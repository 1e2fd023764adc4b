//! Application layer errors.
//!
//! These errors represent failures in orchestration and port access, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A lookup that requires the entity to exist came up empty.
    #[error("no {entity} found for id {id}")]
    EntityNotFound { entity: &'static str, id: String },

    /// Uniqueness rule of the user repository contract.
    #[error("email '{email}' is already registered")]
    DuplicateEmail { email: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("repository store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EntityNotFound { entity, id } => vec![
                format!("No {} with id {} exists", entity, id),
                "Verify the id and try again".into(),
            ],
            Self::DuplicateEmail { email } => vec![
                format!("'{}' is already registered", email),
                "Use a different email address".into(),
            ],
            Self::StoreLockError => vec![
                "The repository store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EntityNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateEmail { .. } => ErrorCategory::Conflict,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
