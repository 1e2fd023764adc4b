//! Unified error handling for Keel Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories for presentation-layer mapping (HTTP status or
//! exit code) and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Keel Core operations.
///
/// This enum wraps all possible errors that can occur when using keel-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => vec![
                "Check the input against the validation rules".into(),
                format!("Details: {}", e),
            ],
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Keel".into(),
                "Please report this issue at: https://github.com/cosecruz/keel/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CoreResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CoreResult<T> {
        self.map_err(|e| CoreError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_map_through_layers() {
        let domain: CoreError = DomainError::EmptyDisplayName.into();
        assert_eq!(domain.category(), ErrorCategory::Validation);

        let conflict: CoreError = ApplicationError::DuplicateEmail {
            email: "ada@example.com".into(),
        }
        .into();
        assert_eq!(conflict.category(), ErrorCategory::Conflict);

        let missing: CoreError = ApplicationError::EntityNotFound {
            entity: "user",
            id: "42".into(),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn only_lock_errors_are_retryable() {
        let lock: CoreError = ApplicationError::StoreLockError.into();
        assert!(lock.is_retryable());

        let domain: CoreError = DomainError::EmptyProductName.into();
        assert!(!domain.is_retryable());
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));

        let err = result.context("reading state").unwrap_err();
        match err {
            CoreError::Internal { message } => {
                assert!(message.starts_with("reading state"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn suggestions_exist_for_every_variant() {
        let errors = [
            CoreError::from(DomainError::EmptyDisplayName),
            CoreError::from(ApplicationError::StoreLockError),
            CoreError::Configuration {
                message: "bad port".into(),
            },
            CoreError::Internal {
                message: "oops".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty());
        }
    }
}
