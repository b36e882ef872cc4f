//! Signup command for Saffron.
//!
//! Creates a new learner account and makes it the active session.

use serde::Serialize;

use crate::accounts;
use crate::error::Result;
use crate::storage::{AccountStore, SessionPointer};

/// Output format for the signup command.
#[derive(Debug, Clone, Serialize)]
pub struct SignupOutput {
    /// The new account id.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Starting level.
    pub current_level: u32,
    /// Starting streak.
    pub streak: u32,
}

/// The signup command implementation.
pub struct SignupCommand<S: AccountStore> {
    store: S,
    pointer: SessionPointer,
}

impl<S: AccountStore> SignupCommand<S> {
    /// Create a new signup command.
    pub fn new(store: S, pointer: SessionPointer) -> Self {
        Self { store, pointer }
    }

    /// Run the signup command.
    ///
    /// A duplicate contact handle surfaces as `AccountExists`; the session
    /// pointer is only moved once the account has been persisted.
    pub fn run(&self, name: &str, email: &str, password: &str) -> Result<SignupOutput> {
        let account = accounts::create_account(&self.store, name, email, password)?;
        self.pointer.set(&account.id)?;

        Ok(SignupOutput {
            account_id: account.id,
            name: account.name,
            current_level: account.progress.current_level,
            streak: account.progress.streak,
        })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &SignupOutput, json: bool) -> String {
        if json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            format!(
                "Welcome, {}! Your journey starts at level {}.\nAccount: {}\n",
                output.name, output.current_level, output.account_id
            )
        }
    }
}
