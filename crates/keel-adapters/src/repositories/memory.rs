//! In-memory repository adapters for testing and reference.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use keel_core::application::ports::{ProductRepository, UserRepository};
use keel_core::domain::{EmailAddress, Product, ProductId, User, UserId};
use keel_core::error::CoreResult;

// ── Users ────────────────────────────────────────────────────────────────────

/// Thread-safe in-memory `UserRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all users.
    pub fn clear(&self) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: &User) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        // One account per email: an upsert of the same user is fine, a
        // different user with the same address is not.
        let clash = inner
            .values()
            .any(|existing| existing.id() != user.id() && existing.email() == user.email());
        if clash {
            return Err(keel_core::application::ApplicationError::DuplicateEmail {
                email: user.email().to_string(),
            }
            .into());
        }

        inner.insert(user.id(), user.clone());
        debug!(user_id = %user.id(), "user saved");
        Ok(())
    }

    fn find_by_id(&self, id: UserId) -> CoreResult<Option<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        Ok(inner.get(&id).cloned())
    }

    fn find_by_email(&self, email: &EmailAddress) -> CoreResult<Option<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        Ok(inner.values().find(|u| u.email() == email).cloned())
    }

    fn list(&self) -> CoreResult<Vec<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn remove(&self, id: UserId) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        match inner.remove(&id) {
            Some(_) => {
                debug!(user_id = %id, "user removed");
                Ok(())
            }
            None => Err(keel_core::application::ApplicationError::EntityNotFound {
                entity: "user",
                id: id.to_string(),
            }
            .into()),
        }
    }
}

// ── Products ─────────────────────────────────────────────────────────────────

/// Thread-safe in-memory `ProductRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all products.
    pub fn clear(&self) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, product: &Product) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        inner.insert(product.id(), product.clone());
        debug!(product_id = %product.id(), "product saved");
        Ok(())
    }

    fn find_by_id(&self, id: ProductId) -> CoreResult<Option<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        Ok(inner.get(&id).cloned())
    }

    fn list(&self) -> CoreResult<Vec<Product>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }

    fn remove(&self, id: ProductId) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| keel_core::application::ApplicationError::StoreLockError)?;

        match inner.remove(&id) {
            Some(_) => Ok(()),
            None => Err(keel_core::application::ApplicationError::EntityNotFound {
                entity: "product",
                id: id.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use keel_core::application::ApplicationError;
    use keel_core::domain::Price;
    use keel_core::error::CoreError;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn user(email: &str, name: &str) -> User {
        User::new(EmailAddress::parse(email).unwrap(), name, at(0)).unwrap()
    }

    fn product(name: &str, cents: u64) -> Product {
        Product::new(name, Price::from_minor_units(cents), at(0)).unwrap()
    }

    // ========================================================================
    // User repository
    // ========================================================================

    #[test]
    fn save_then_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let ada = user("ada@example.com", "Ada");

        repo.save(&ada).unwrap();

        let found = repo.find_by_id(ada.id()).unwrap();
        assert_eq!(found, Some(ada));
    }

    #[test]
    fn find_by_email_matches_exactly() {
        let repo = InMemoryUserRepository::new();
        let ada = user("ada@example.com", "Ada");
        repo.save(&ada).unwrap();

        let hit = repo
            .find_by_email(&EmailAddress::parse("ada@example.com").unwrap())
            .unwrap();
        assert_eq!(hit.map(|u| u.id()), Some(ada.id()));

        let miss = repo
            .find_by_email(&EmailAddress::parse("grace@example.com").unwrap())
            .unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn save_rejects_duplicate_email_for_other_user() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("ada@example.com", "Ada")).unwrap();

        let imposter = user("ada@example.com", "Not Ada");
        let err = repo.save(&imposter).unwrap_err();

        assert_eq!(
            err,
            CoreError::Application(ApplicationError::DuplicateEmail {
                email: "ada@example.com".into()
            })
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn save_upserts_same_user() {
        let repo = InMemoryUserRepository::new();
        let mut ada = user("ada@example.com", "Ada");
        repo.save(&ada).unwrap();

        // Same id, same email, new name: an update, not a conflict.
        ada.rename("Countess Lovelace").unwrap();
        repo.save(&ada).unwrap();

        assert_eq!(repo.len(), 1);
        let stored = repo.find_by_id(ada.id()).unwrap().unwrap();
        assert_eq!(stored.display_name(), "Countess Lovelace");
    }

    #[test]
    fn remove_absent_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let ghost = user("ghost@example.com", "Ghost");

        let err = repo.remove(ghost.id()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::EntityNotFound { entity: "user", .. })
        ));
    }

    #[test]
    fn remove_then_find_is_none() {
        let repo = InMemoryUserRepository::new();
        let ada = user("ada@example.com", "Ada");
        repo.save(&ada).unwrap();

        repo.remove(ada.id()).unwrap();
        assert!(repo.find_by_id(ada.id()).unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn list_returns_every_user() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@example.com", "A")).unwrap();
        repo.save(&user("b@example.com", "B")).unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn clear_empties_the_store() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@example.com", "A")).unwrap();

        repo.clear().unwrap();
        assert!(repo.is_empty());
    }

    // The port is consumed as a trait object; make sure that compiles and
    // behaves, since that is how the template wires adapters.
    #[test]
    fn usable_through_the_port() {
        let repo: Box<dyn UserRepository> = Box::new(InMemoryUserRepository::new());
        let ada = user("ada@example.com", "Ada");

        repo.save(&ada).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    // ========================================================================
    // Product repository
    // ========================================================================

    #[test]
    fn product_save_then_find() {
        let repo = InMemoryProductRepository::new();
        let widget = product("Widget", 1999);

        repo.save(&widget).unwrap();
        assert_eq!(repo.find_by_id(widget.id()).unwrap(), Some(widget));
    }

    #[test]
    fn product_remove_absent_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let widget = product("Widget", 100);

        let err = repo.remove(widget.id()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::EntityNotFound {
                entity: "product",
                ..
            })
        ));
    }

    #[test]
    fn product_upsert_replaces() {
        let repo = InMemoryProductRepository::new();
        let mut widget = product("Widget", 100);
        repo.save(&widget).unwrap();

        widget.change_price(Price::from_minor_units(250));
        repo.save(&widget).unwrap();

        let stored = repo.find_by_id(widget.id()).unwrap().unwrap();
        assert_eq!(stored.unit_price(), Price::from_minor_units(250));
        assert_eq!(repo.len(), 1);
    }
}
