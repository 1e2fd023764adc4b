//! The `Product` entity.
//!
//! The second worked example, shaped like `User` but with a money-valued
//! field so the template shows a non-string value object in an entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Price, ProductId},
};

// ── Entity ───────────────────────────────────────────────────────────────────

/// A catalog product.
///
/// Guaranteed on construction:
/// - `name` is non-empty after trimming
/// - `unit_price` is exact integer cents (`Price` invariant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Price,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with a fresh id.
    pub fn new(
        name: impl Into<String>,
        unit_price: Price,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = Self::normalize_name(name.into())?;
        Ok(Self {
            id: ProductId::new(),
            name,
            unit_price,
            created_at,
        })
    }

    pub const fn id(&self) -> ProductId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Change the product name, re-checking the non-empty invariant.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = Self::normalize_name(name.into())?;
        Ok(())
    }

    /// Reprice. Infallible: any `Price` is a valid price.
    pub fn change_price(&mut self, unit_price: Price) {
        self.unit_price = unit_price;
    }

    fn normalize_name(raw: String) -> Result<String, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyProductName);
        }
        Ok(trimmed.to_string())
    }
}
