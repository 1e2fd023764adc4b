// ============================================================================
// domain/error.rs - DOMAIN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (constructors return them by value)
/// - Categorizable (for presentation-layer status mapping)
///
/// Every variant corresponds to a constructor-time check on an entity or
/// value object. Nothing in the shipped request path can produce one; they
/// exist so the validation pattern is demonstrated end to end.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Value Object Validation (400-level equivalent)
    // ========================================================================
    #[error("invalid email address '{email}': {reason}")]
    InvalidEmail { email: String, reason: String },

    #[error("invalid id '{value}': {reason}")]
    InvalidId { value: String, reason: String },

    #[error("invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    // ========================================================================
    // Entity Validation
    // ========================================================================
    #[error("display name cannot be empty")]
    EmptyDisplayName,

    #[error("product name cannot be empty")]
    EmptyProductName,
}

impl DomainError {
    /// Error category for presentation-layer styling and status mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEmail { .. }
            | Self::InvalidId { .. }
            | Self::InvalidPrice { .. }
            | Self::EmptyDisplayName
            | Self::EmptyProductName => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
