//! Active-session pointer for Saffron.
//!
//! A single-slot, file-backed pointer naming the account id of the active
//! session. It is an explicit value handed to commands, not ambient global
//! state; anything that needs the active account receives either this
//! pointer or an account id directly.

use std::fs;
use std::path::PathBuf;

use crate::config::session_path;
use crate::error::{Result, SaffronError};

/// File-backed pointer to the active session's account id.
#[derive(Debug, Clone)]
pub struct SessionPointer {
    path: PathBuf,
}

impl SessionPointer {
    /// Create a pointer at the default location (`<saffron_home>/session`).
    pub fn new() -> Result<Self> {
        let path = session_path().ok_or_else(|| {
            SaffronError::config("Could not determine session path (no home directory)")
        })?;
        Ok(Self::with_path(path))
    }

    /// Create a pointer at a custom location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The account id of the active session, if any.
    pub fn current(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| SaffronError::storage(&self.path, e))?;
        let id = content.trim();

        if id.is_empty() {
            return Ok(None);
        }
        Ok(Some(id.to_string()))
    }

    /// Point the active session at an account id.
    pub fn set(&self, account_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SaffronError::storage(parent, e))?;
            }
        }

        fs::write(&self.path, account_id).map_err(|e| SaffronError::storage(&self.path, e))
    }

    /// Clear the active session.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| SaffronError::storage(&self.path, e))?;
        }
        Ok(())
    }

    /// Resolve an explicit account id or fall back to the active session.
    ///
    /// Errors with `NoSession` when neither is available.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(id) = explicit {
            return Ok(id.to_string());
        }
        self.current()?.ok_or(SaffronError::NoSession)
    }
}
