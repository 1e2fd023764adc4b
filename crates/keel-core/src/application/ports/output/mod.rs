//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `keel-adapters` crate provides implementations.
//!
//! The repository contracts are deliberately storage-agnostic: nothing here
//! names a database, a table, or a transaction. A future real adapter keeps
//! the same signatures.

use chrono::{DateTime, Utc};

use crate::domain::{EmailAddress, Product, ProductId, User, UserId};
use crate::error::CoreResult;

/// Port for `User` storage.
///
/// Implemented by:
/// - `keel_adapters::repositories::InMemoryUserRepository` (testing, reference)
/// - A real database adapter (future; see the persistence guide)
///
/// ## Contract
///
/// - `save` upserts by id, but rejects an email that is already registered
///   to a *different* user (`ApplicationError::DuplicateEmail`)
/// - `find_*` return `Ok(None)` for absent entities; only `remove` treats
///   absence as an error
/// - Async-ready (can be extended with async-trait later)
pub trait UserRepository: Send + Sync {
    /// Insert or replace a user, keyed by its id.
    fn save(&self, user: &User) -> CoreResult<()>;

    /// Look up a user by id.
    fn find_by_id(&self, id: UserId) -> CoreResult<Option<User>>;

    /// Look up a user by email address.
    fn find_by_email(&self, email: &EmailAddress) -> CoreResult<Option<User>>;

    /// All stored users, in no particular order.
    fn list(&self) -> CoreResult<Vec<User>>;

    /// Remove a user. Errors with `EntityNotFound` if the id is absent.
    fn remove(&self, id: UserId) -> CoreResult<()>;
}

/// Port for `Product` storage.
///
/// Implemented by:
/// - `keel_adapters::repositories::InMemoryProductRepository` (testing, reference)
/// - A real database adapter (future; see the persistence guide)
pub trait ProductRepository: Send + Sync {
    /// Insert or replace a product, keyed by its id.
    fn save(&self, product: &Product) -> CoreResult<()>;

    /// Look up a product by id.
    fn find_by_id(&self, id: ProductId) -> CoreResult<Option<Product>>;

    /// All stored products, in no particular order.
    fn list(&self) -> CoreResult<Vec<Product>>;

    /// Remove a product. Errors with `EntityNotFound` if the id is absent.
    fn remove(&self, id: ProductId) -> CoreResult<()>;
}

/// Port for reading the current time.
///
/// Implemented by:
/// - `keel_adapters::clock::SystemClock` (production)
/// - `keel_adapters::clock::FixedClock` (testing)
///
/// Keeping the clock behind a port is what lets the status use case assert
/// exact uptimes in tests. Domain entities never call this; they take
/// timestamps as constructor arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}
