//! Stage-completion progression rules for Saffron.
//!
//! Recorded stage progress is a running maximum: replaying an earlier stage
//! never regresses it. Experience points accumulate unconditionally, replays
//! included; xp reflects effort spent, not net curriculum advancement.
//!
//! The full replacement record is computed before anything is written back,
//! so an observer never sees updated xp next to a stale vocabulary.

use chrono::{DateTime, Utc};

use crate::core::account::{LearnerProgress, WordMetadata, STAGES_PER_LEVEL};
use crate::core::vocabulary;

/// Outcome of one completed practice stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome {
    /// The level the stage belongs to.
    pub level_id: u32,
    /// The stage just completed. Clamped to `[1, 10]` before use.
    pub completed_stage: u8,
    /// Experience earned in the session.
    pub xp_gained: u32,
    /// Vocabulary candidates produced by the session (may be empty).
    pub words: Vec<WordMetadata>,
}

/// Apply a completed stage to a learner's progress.
///
/// Out-of-range stage numbers are sanitized by clamping, never rejected.
pub fn apply_stage_completion(
    progress: &LearnerProgress,
    outcome: &StageOutcome,
    now: DateTime<Utc>,
) -> LearnerProgress {
    let stage = outcome.completed_stage.clamp(1, STAGES_PER_LEVEL);
    let prior = progress.stages_completed(outcome.level_id);

    let mut updated = progress.clone();

    updated
        .level_progress
        .insert(outcome.level_id, prior.max(stage));

    // Finishing the final stage of the frontier level unlocks the next one.
    // Stage 10 of an already-finished or non-frontier level does not.
    if stage == STAGES_PER_LEVEL
        && prior < STAGES_PER_LEVEL
        && outcome.level_id == progress.current_level
    {
        updated.current_level = progress.current_level + 1;
    }

    updated.xp = progress.xp + u64::from(outcome.xp_gained);
    updated.vocabulary = vocabulary::merge(&progress.vocabulary, &outcome.words, outcome.level_id, now);
    updated.last_activity_at = now;

    updated
}
