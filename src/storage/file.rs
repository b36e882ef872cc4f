//! File-based account storage for Saffron.
//!
//! Accounts are stored as JSON files in `~/.saffron/accounts/`.
//! Atomic writes are achieved via temp file + rename pattern, so a crash
//! mid-write never leaves a torn progress record behind.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::config::accounts_dir;
use crate::core::LearnerAccount;
use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// File-based account storage.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    /// Directory where account files are stored.
    accounts_dir: PathBuf,
}

impl FileAccountStore {
    /// Create a new file account store with the default directory.
    ///
    /// Uses `~/.saffron/accounts/` or `$SAFFRON_HOME/accounts/`.
    pub fn new() -> Result<Self> {
        let dir = accounts_dir().ok_or_else(|| {
            SaffronError::config("Could not determine accounts directory (no home directory)")
        })?;
        Self::with_dir(dir)
    }

    /// Create a new file account store with a custom directory.
    pub fn with_dir(accounts_dir: impl Into<PathBuf>) -> Result<Self> {
        let accounts_dir = accounts_dir.into();

        if !accounts_dir.exists() {
            fs::create_dir_all(&accounts_dir)
                .map_err(|e| SaffronError::storage(&accounts_dir, e))?;
        }

        Ok(Self { accounts_dir })
    }

    /// Get the path for an account file.
    fn account_path(&self, id: &str) -> PathBuf {
        self.accounts_dir.join(format!("{}.json", id))
    }

    /// Get the path for a temp file used during atomic writes.
    fn temp_path(&self, id: &str) -> PathBuf {
        self.accounts_dir.join(format!(".{}.json.tmp", id))
    }

    /// Write an account atomically using temp file + rename.
    fn atomic_write(&self, account: &LearnerAccount) -> Result<()> {
        let final_path = self.account_path(&account.id);
        let temp_path = self.temp_path(&account.id);

        let json = serde_json::to_string_pretty(account)?;

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| SaffronError::storage(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| SaffronError::storage(&temp_path, e))?;
            file.sync_all()
                .map_err(|e| SaffronError::storage(&temp_path, e))?;
        }

        // Rename temp file to final path (atomic on POSIX)
        fs::rename(&temp_path, &final_path).map_err(|e| SaffronError::storage(&final_path, e))?;

        Ok(())
    }
}

impl AccountStore for FileAccountStore {
    fn get(&self, id: &str) -> Result<Option<LearnerAccount>> {
        let path = self.account_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| SaffronError::storage(&path, e))?;
        let account: LearnerAccount = serde_json::from_str(&content)?;

        Ok(Some(account))
    }

    fn put(&self, account: &LearnerAccount) -> Result<()> {
        self.atomic_write(account)
    }

    fn list(&self) -> Result<Vec<LearnerAccount>> {
        if !self.accounts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut accounts: Vec<LearnerAccount> = Vec::new();

        let entries = fs::read_dir(&self.accounts_dir)
            .map_err(|e| SaffronError::storage(&self.accounts_dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| SaffronError::storage(&self.accounts_dir, e))?;
            let path = entry.path();

            // Skip non-JSON files and temp files
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            if path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with('.'))
                .unwrap_or(true)
            {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<LearnerAccount>(&content) {
                    Ok(account) => accounts.push(account),
                    Err(e) => {
                        tracing::warn!("skipping unreadable account file {}: {}", path.display(), e)
                    }
                },
                Err(e) => {
                    tracing::warn!("skipping unreadable account file {}: {}", path.display(), e)
                }
            }
        }

        // Most recently joined first; deterministic regardless of file mtimes.
        accounts.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));

        Ok(accounts)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.account_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(|e| SaffronError::storage(&path, e))?;
        }

        // Also clean up any temp file
        let temp_path = self.temp_path(id);
        if temp_path.exists() {
            let _ = fs::remove_file(&temp_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::tests::test_account_store_crud;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn create_test_store() -> (FileAccountStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FileAccountStore::with_dir(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_file_account_store_crud() {
        let (store, _dir) = create_test_store();
        test_account_store_crud(&store);
    }

    #[test]
    fn test_with_dir_creates_directory() {
        let dir = TempDir::new().unwrap();
        let accounts_path = dir.path().join("accounts");

        assert!(!accounts_path.exists());

        let _store = FileAccountStore::with_dir(&accounts_path).unwrap();

        assert!(accounts_path.exists());
        assert!(accounts_path.is_dir());
    }

    #[test]
    fn test_get_nonexistent() {
        let (store, _dir) = create_test_store();
        assert!(store.get("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_put_replaces_whole_record() {
        let (store, _dir) = create_test_store();

        let mut account = LearnerAccount::new("acct-1", "Sara", "sara@example.com", "pw");
        store.put(&account).unwrap();

        account.progress.xp = 480;
        account.progress.level_progress.insert(1, 6);
        store.put(&account).unwrap();

        let retrieved = store.get("acct-1").unwrap().unwrap();
        assert_eq!(retrieved.progress.xp, 480);
        assert_eq!(retrieved.progress.stages_completed(1), 6);
    }

    #[test]
    fn test_list_ordered_by_joined_at() {
        let (store, _dir) = create_test_store();

        let mut oldest = LearnerAccount::new("a1", "One", "one@example.com", "pw");
        oldest.joined_at = Utc::now() - Duration::days(2);
        let mut middle = LearnerAccount::new("a2", "Two", "two@example.com", "pw");
        middle.joined_at = Utc::now() - Duration::days(1);
        let newest = LearnerAccount::new("a3", "Three", "three@example.com", "pw");

        store.put(&middle).unwrap();
        store.put(&newest).unwrap();
        store.put(&oldest).unwrap();

        let listed = store.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a2", "a1"]);
    }

    #[test]
    fn test_list_ignores_temp_files() {
        let (store, dir) = create_test_store();

        store
            .put(&LearnerAccount::new("a1", "One", "one@example.com", "pw"))
            .unwrap();
        fs::write(dir.path().join(".x.json.tmp"), "{}").unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a1");
    }

    #[test]
    fn test_list_skips_invalid_json() {
        let (store, dir) = create_test_store();

        store
            .put(&LearnerAccount::new("a1", "One", "one@example.com", "pw"))
            .unwrap();
        fs::write(dir.path().join("broken.json"), "not valid json").unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a1");
    }

    #[test]
    fn test_get_corrupt_file_is_an_error() {
        // A targeted read of a corrupt record must surface, not vanish:
        // callers need to know their progress file is damaged.
        let (store, dir) = create_test_store();
        fs::write(dir.path().join("a1.json"), "{ corrupt").unwrap();

        let result = store.get("a1");
        assert!(matches!(result, Err(SaffronError::Serde { .. })));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let (store, _dir) = create_test_store();

        let account = LearnerAccount::new("acct-1", "Sara", "sara@example.com", "pw");
        store.put(&account).unwrap();

        assert!(!store.temp_path("acct-1").exists());
        assert!(store.account_path("acct-1").exists());
    }

    #[test]
    fn test_written_file_is_valid_json() {
        let (store, _dir) = create_test_store();

        let account = LearnerAccount::new("acct-1", "Sara", "sara@example.com", "pw");
        store.put(&account).unwrap();

        let content = fs::read_to_string(store.account_path("acct-1")).unwrap();
        let parsed: LearnerAccount = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.id, "acct-1");
    }

    #[test]
    fn test_delete_nonexistent() {
        let (store, _dir) = create_test_store();
        store.delete("nonexistent").unwrap();
    }
}
