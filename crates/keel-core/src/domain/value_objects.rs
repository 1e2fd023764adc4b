//! Domain value objects: UserId, ProductId, EmailAddress, Price.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. Validation
//! lives in `parse` constructors; entities receive already-valid values and
//! never re-check them. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Value Objects
//!
//! 1. Add the type and its `parse`/`FromStr` here
//! 2. Add a matching variant to `DomainError`
//! 3. Done, nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ── UserId ───────────────────────────────────────────────────────────────────

/// Identity of a `User`, backed by a v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Mint a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its canonical string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidId {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── ProductId ────────────────────────────────────────────────────────────────

/// Identity of a `Product`, backed by a v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidId {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── EmailAddress ─────────────────────────────────────────────────────────────

/// A syntactically plausible email address.
///
/// The check is deliberately shallow: an `'@'` with a non-empty local part
/// and a non-empty domain part. Real deliverability checks belong in an
/// infrastructure adapter, not the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize (trim) an email address.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        let reason = match trimmed.split_once('@') {
            None => Some("missing '@'"),
            Some(("", _)) => Some("empty local part"),
            Some((_, "")) => Some("empty domain part"),
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidEmail {
                email: value,
                reason: reason.to_string(),
            }),
            None => Ok(Self(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Price ────────────────────────────────────────────────────────────────────

/// A non-negative amount in minor currency units (cents).
///
/// Stored as integer cents so arithmetic stays exact. `Display` renders the
/// major form (`1234` → `12.34`); currency is out of scope here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_minor_units(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn minor_units(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parse a major-form amount: `"12.34"` or `"12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidPrice {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (whole, frac) = match s.trim().split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.trim(), "00"),
        };

        if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("fractional part must be exactly two digits"));
        }

        let whole: u64 = whole.parse().map_err(|_| invalid("not a number"))?;
        let frac: u64 = frac.parse().map_err(|_| invalid("not a number"))?;

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Self)
            .ok_or_else(|| invalid("amount too large"))
    }
}
