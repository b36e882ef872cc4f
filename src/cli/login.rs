//! Login command for Saffron.
//!
//! Authenticates a learner, reconciles the activity streak and points the
//! active session at the account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::accounts;
use crate::core::StreakChange;
use crate::error::Result;
use crate::storage::{AccountStore, SessionPointer};

/// Output format for the login command.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutput {
    /// The authenticated account id.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Streak after reconciliation.
    pub streak: u32,
    /// What reconciliation did to the streak.
    pub streak_status: String,
}

fn streak_status(change: StreakChange) -> &'static str {
    match change {
        StreakChange::Unchanged => "unchanged",
        StreakChange::Extended => "extended",
        StreakChange::Reset => "reset",
    }
}

/// The login command implementation.
pub struct LoginCommand<S: AccountStore> {
    store: S,
    pointer: SessionPointer,
}

impl<S: AccountStore> LoginCommand<S> {
    /// Create a new login command.
    pub fn new(store: S, pointer: SessionPointer) -> Self {
        Self { store, pointer }
    }

    /// Run the login command.
    pub fn run(&self, email: &str, password: &str, now: DateTime<Utc>) -> Result<LoginOutput> {
        let account = accounts::authenticate(&self.store, email, password)?;
        let (account, change) = accounts::resume(&self.store, &account.id, now)?;
        self.pointer.set(&account.id)?;

        Ok(LoginOutput {
            account_id: account.id,
            name: account.name,
            streak: account.progress.streak,
            streak_status: streak_status(change).to_string(),
        })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &LoginOutput, json: bool) -> String {
        if json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            let streak_line = match output.streak_status.as_str() {
                "extended" => format!("Streak extended: {} days!", output.streak),
                "reset" => "Streak reset. New day one.".to_string(),
                _ => format!("Streak: {} days.", output.streak),
            };
            format!("Welcome back, {}!\n{}\n", output.name, streak_line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaffronError;
    use crate::storage::MemoryAccountStore;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn setup() -> (Arc<MemoryAccountStore>, SessionPointer, TempDir) {
        let dir = TempDir::new().unwrap();
        let pointer = SessionPointer::with_path(dir.path().join("session"));
        (Arc::new(MemoryAccountStore::new()), pointer, dir)
    }

    #[test]
    fn test_login_sets_session_and_reconciles() {
        let (store, pointer, _dir) = setup();
        let mut account =
            accounts::create_account(&store, "Sara", "sara@example.com", "pw").unwrap();

        // Noon UTC keeps day arithmetic stable in any local timezone.
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        account.progress.last_activity_at = now - Duration::days(1);
        account.progress.streak = 2;
        store.put(&account).unwrap();

        let cmd = LoginCommand::new(Arc::clone(&store), pointer.clone());
        let output = cmd.run("sara@example.com", "pw", now).unwrap();

        assert_eq!(output.streak, 3);
        assert_eq!(output.streak_status, "extended");
        assert_eq!(pointer.current().unwrap(), Some(output.account_id));
    }

    #[test]
    fn test_login_bad_credentials_leaves_session_untouched() {
        let (store, pointer, _dir) = setup();
        accounts::create_account(&store, "Sara", "sara@example.com", "pw").unwrap();

        let cmd = LoginCommand::new(store, pointer.clone());
        let result = cmd.run("sara@example.com", "wrong", Utc::now());

        assert!(matches!(result, Err(SaffronError::AuthFailed)));
        assert!(pointer.current().unwrap().is_none());
    }

    #[test]
    fn test_login_same_day_streak_unchanged() {
        let (store, pointer, _dir) = setup();
        accounts::create_account(&store, "Sara", "sara@example.com", "pw").unwrap();

        let cmd = LoginCommand::new(store, pointer);
        let output = cmd.run("sara@example.com", "pw", Utc::now()).unwrap();

        assert_eq!(output.streak, 1);
        assert_eq!(output.streak_status, "unchanged");
    }

    #[test]
    fn test_format_output_variants() {
        let (store, pointer, _dir) = setup();
        let cmd = LoginCommand::new(store, pointer);

        let extended = LoginOutput {
            account_id: "a".to_string(),
            name: "Sara".to_string(),
            streak: 5,
            streak_status: "extended".to_string(),
        };
        assert!(cmd
            .format_output(&extended, false)
            .contains("Streak extended: 5 days!"));

        let reset = LoginOutput {
            streak_status: "reset".to_string(),
            ..extended.clone()
        };
        assert!(cmd.format_output(&reset, false).contains("Streak reset"));

        assert!(cmd
            .format_output(&extended, true)
            .contains("\"streak\": 5"));
    }
}
