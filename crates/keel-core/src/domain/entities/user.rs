//! The `User` entity.
//!
//! A skeletal aggregate kept as the worked example for entity conventions:
//! identity via a value-object id, invariants checked on construction, and
//! mutators that cannot break those invariants. No running code path touches
//! it; the in-memory repository and the unit tests are its only consumers.
//!
//! # Domain purity
//!
//! This module must not import `tracing` and never reads the clock itself.
//! `created_at` is passed in by whoever constructs the entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{EmailAddress, UserId},
};

// ── Entity ───────────────────────────────────────────────────────────────────

/// A registered user.
///
/// Guaranteed on construction:
/// - `email` passed `EmailAddress::parse` (contains `'@'` with both parts)
/// - `display_name` is non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    display_name: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with a fresh id.
    pub fn new(
        email: EmailAddress,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let display_name = Self::normalize_name(display_name.into())?;
        Ok(Self {
            id: UserId::new(),
            email,
            display_name,
            created_at,
        })
    }

    pub const fn id(&self) -> UserId {
        self.id
    }
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Change the display name, re-checking the non-empty invariant.
    pub fn rename(&mut self, display_name: impl Into<String>) -> Result<(), DomainError> {
        self.display_name = Self::normalize_name(display_name.into())?;
        Ok(())
    }

    /// Change the email address. Infallible: `EmailAddress` is valid by
    /// construction, so there is nothing left to check here.
    pub fn change_email(&mut self, email: EmailAddress) {
        self.email = email;
    }

    fn normalize_name(raw: String) -> Result<String, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyDisplayName);
        }
        Ok(trimmed.to_string())
    }
}
