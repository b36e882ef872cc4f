//! Calendar-day streak reconciliation for Saffron.
//!
//! Reconciliation runs on every session resume, not once per day. Both the
//! stored activity timestamp and `now` normalize to their local calendar
//! day before comparison, so wall-clock time within a day is irrelevant.
//!
//! `last_activity_at` is restamped on every call, including the same-day
//! no-op branch: repeated same-day reconciliations re-derive a zero-day
//! difference against the fresh stamp, so the streak increments at most
//! once per calendar-day transition.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::core::account::LearnerProgress;

/// What happened to the streak during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Same calendar day; streak untouched.
    Unchanged,
    /// Activity on the very next calendar day; streak extended by one.
    Extended,
    /// One or more days skipped; streak reset to 1.
    Reset,
}

/// Reconcile the activity streak against the current time.
///
/// Returns a complete replacement progress record plus what changed.
pub fn reconcile(progress: &LearnerProgress, now: DateTime<Utc>) -> (LearnerProgress, StreakChange) {
    let last_day = local_day(progress.last_activity_at);
    let today = local_day(now);

    // Absolute difference in whole calendar days. A future-dated stamp
    // (clock skew) is treated the same as a past one.
    let diff_days = (today - last_day).num_days().abs();

    let (streak, change) = match diff_days {
        0 => (progress.streak, StreakChange::Unchanged),
        1 => (progress.streak + 1, StreakChange::Extended),
        _ => (1, StreakChange::Reset),
    };

    let mut updated = progress.clone();
    updated.streak = streak;
    updated.last_activity_at = now;

    (updated, change)
}

/// The local calendar day a timestamp falls on.
fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}
