//! In-memory account storage for testing.
//!
//! Thread-safe implementation using `RwLock<HashMap>`. Accounts are stored
//! in memory and lost when the store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::LearnerAccount;
use crate::error::Result;
use crate::storage::AccountStore;

/// In-memory account store for testing.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, LearnerAccount>>,
}

impl MemoryAccountStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.read().unwrap().is_empty()
    }

    /// Clear all accounts from the store.
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
    }
}

impl AccountStore for MemoryAccountStore {
    fn get(&self, id: &str) -> Result<Option<LearnerAccount>> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts.get(id).cloned())
    }

    fn put(&self, account: &LearnerAccount) -> Result<()> {
        let mut accounts = self.accounts.write().unwrap();
        accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<LearnerAccount>> {
        let accounts = self.accounts.read().unwrap();
        let mut result: Vec<LearnerAccount> = accounts.values().cloned().collect();

        // Most recently joined first, same as the file store.
        result.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));

        Ok(result)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut accounts = self.accounts.write().unwrap();
        accounts.remove(id);
        Ok(())
    }
}
