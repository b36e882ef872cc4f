//! Account lifecycle operations for Saffron.
//!
//! Signup, login and session resume over an [`AccountStore`]. Resume is the
//! session-lifecycle trigger: every resume reconciles the activity streak
//! and writes the updated record through before returning it.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};

use crate::core::{streak, LearnerAccount, StreakChange};
use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// Counter disambiguating accounts created within the same millisecond.
static ACCOUNT_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a fresh opaque account id.
fn next_account_id(now: DateTime<Utc>) -> String {
    let n = ACCOUNT_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("acct-{}-{}", now.timestamp_millis(), n)
}

/// Create a new account with fresh progress.
///
/// The contact handle must be unique case-insensitively; a duplicate is
/// reported as [`SaffronError::AccountExists`], which callers can tell
/// apart from a failed login.
pub fn create_account<S: AccountStore>(
    store: &S,
    name: &str,
    email: &str,
    password: &str,
) -> Result<LearnerAccount> {
    if let Some(existing) = store.find_by_email(email)? {
        return Err(SaffronError::account_exists(existing.email));
    }

    let account = LearnerAccount::new(next_account_id(Utc::now()), name, email, password);
    store.put(&account)?;

    tracing::debug!(account_id = %account.id, "account created");
    Ok(account)
}

/// Authenticate by contact handle and password.
///
/// The handle matches case-insensitively; the password must match exactly.
/// Any mismatch is the same [`SaffronError::AuthFailed`] — callers learn
/// nothing about which part was wrong.
pub fn authenticate<S: AccountStore>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<LearnerAccount> {
    match store.find_by_email(email)? {
        Some(account) if account.password == password => Ok(account),
        _ => Err(SaffronError::AuthFailed),
    }
}

/// Resume a session for an account id.
///
/// Reconciles the activity streak against `now` and writes the updated
/// record through before returning it. Safe to call on every app load;
/// repeated same-day resumes never double-increment the streak.
pub fn resume<S: AccountStore>(
    store: &S,
    account_id: &str,
    now: DateTime<Utc>,
) -> Result<(LearnerAccount, StreakChange)> {
    let mut account = store
        .get(account_id)?
        .ok_or_else(|| SaffronError::account_not_found(account_id))?;

    let (progress, change) = streak::reconcile(&account.progress, now);
    account.progress = progress;
    store.put(&account)?;

    Ok((account, change))
}
