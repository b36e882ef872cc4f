//! Account storage traits for Saffron.
//!
//! This module defines the `AccountStore` trait for learner persistence.
//! The storage medium is an implementation detail; progression logic only
//! ever talks to this trait.

use std::sync::Arc;

use crate::core::LearnerAccount;
use crate::error::Result;

/// Trait for account storage backends.
///
/// Implementations provide persistent storage for learner accounts,
/// supporting CRUD operations and contact-handle lookup.
pub trait AccountStore: Send + Sync {
    /// Retrieve an account by ID.
    ///
    /// Returns `Ok(None)` if the account doesn't exist.
    fn get(&self, id: &str) -> Result<Option<LearnerAccount>>;

    /// Save an account.
    ///
    /// Creates a new account or replaces an existing one whole; partial
    /// writes are never observable.
    fn put(&self, account: &LearnerAccount) -> Result<()>;

    /// List all accounts, most recently joined first.
    fn list(&self) -> Result<Vec<LearnerAccount>>;

    /// Delete an account.
    ///
    /// Returns `Ok(())` even if the account doesn't exist.
    fn delete(&self, id: &str) -> Result<()>;

    /// Check if an account exists.
    fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Find an account by contact handle, case-insensitively.
    fn find_by_email(&self, email: &str) -> Result<Option<LearnerAccount>> {
        let needle = email.to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|account| account.email.to_lowercase() == needle))
    }
}

/// Blanket implementation of AccountStore for Arc-wrapped stores.
///
/// This allows using `Arc<T>` where `T: AccountStore` is expected, which is
/// useful for sharing stores between tests and commands.
impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    fn get(&self, id: &str) -> Result<Option<LearnerAccount>> {
        (**self).get(id)
    }

    fn put(&self, account: &LearnerAccount) -> Result<()> {
        (**self).put(account)
    }

    fn list(&self) -> Result<Vec<LearnerAccount>> {
        (**self).list()
    }

    fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id)
    }
}
