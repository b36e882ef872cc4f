//! Unified error types for Saffron.
//!
//! Progression state is the one thing this crate must never lose silently,
//! so storage failures are always surfaced to the caller as an explicit
//! error rather than masked with a default. Duplicate-account creation is a
//! distinct error kind so callers can tell it apart from a failed login.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Saffron operations.
#[derive(Error, Debug)]
pub enum SaffronError {
    /// I/O errors from account or session-pointer file operations.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// An account with the same contact handle already exists.
    #[error("account already exists for {handle}")]
    AccountExists { handle: String },

    /// Account id not found in the store.
    #[error("account not found: {account_id}")]
    AccountNotFound { account_id: String },

    /// Credentials did not match any account.
    #[error("authentication failed")]
    AuthFailed,

    /// No active session pointer when one was required.
    #[error("no active session; log in first or pass --account")]
    NoSession,

    /// Content or pronunciation provider errors.
    #[error("provider error: {message}")]
    Provider { message: String },
}

/// A specialized Result type for Saffron operations.
pub type Result<T> = std::result::Result<T, SaffronError>;

impl SaffronError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an account-exists error.
    pub fn account_exists(handle: impl Into<String>) -> Self {
        Self::AccountExists {
            handle: handle.into(),
        }
    }

    /// Create an account-not-found error.
    pub fn account_not_found(account_id: impl Into<String>) -> Self {
        Self::AccountNotFound {
            account_id: account_id.into(),
        }
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Whether this error is a user-input problem rather than an
    /// infrastructure failure.
    ///
    /// User errors (bad credentials, duplicate signup, missing account) get
    /// a plain message; infrastructure errors keep their source chain.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::AccountExists { .. }
                | Self::AccountNotFound { .. }
                | Self::AuthFailed
                | Self::NoSession
        )
    }
}

impl From<io::Error> for SaffronError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SaffronError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = SaffronError::storage(
            "/tmp/accounts/a1.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("storage error"));
        assert!(err.to_string().contains("/tmp/accounts/a1.json"));
    }

    #[test]
    fn test_serde_error_display() {
        let err = SaffronError::serde("invalid JSON");
        assert_eq!(err.to_string(), "serialization error: invalid JSON");
    }

    #[test]
    fn test_config_error_display() {
        let err = SaffronError::config("invalid TOML");
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn test_account_exists_display() {
        let err = SaffronError::account_exists("sara@example.com");
        assert_eq!(
            err.to_string(),
            "account already exists for sara@example.com"
        );
    }

    #[test]
    fn test_account_not_found_display() {
        let err = SaffronError::account_not_found("acct-123");
        assert_eq!(err.to_string(), "account not found: acct-123");
    }

    #[test]
    fn test_duplicate_signup_distinct_from_auth_failure() {
        // Callers must be able to tell "that handle is taken" apart from
        // "wrong credentials".
        let dup = SaffronError::account_exists("sara@example.com");
        let auth = SaffronError::AuthFailed;

        assert!(matches!(dup, SaffronError::AccountExists { .. }));
        assert!(matches!(auth, SaffronError::AuthFailed));
        assert_ne!(dup.to_string(), auth.to_string());
    }

    #[test]
    fn test_is_user_error() {
        assert!(SaffronError::account_exists("x").is_user_error());
        assert!(SaffronError::account_not_found("x").is_user_error());
        assert!(SaffronError::AuthFailed.is_user_error());
        assert!(SaffronError::NoSession.is_user_error());

        assert!(!SaffronError::serde("x").is_user_error());
        assert!(!SaffronError::config("x").is_user_error());
        assert!(!SaffronError::provider("x").is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: SaffronError = io_err.into();
        assert!(matches!(err, SaffronError::Storage { .. }));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: SaffronError = json_err.into();
        assert!(matches!(err, SaffronError::Serde { .. }));
    }
}
