//! Learner account and progress types for Saffron.
//!
//! `LearnerAccount` is the persisted unit: identity plus exactly one
//! `LearnerProgress`. Progress is only ever mutated by streak reconciliation
//! and stage completion, each of which computes a complete replacement record
//! before anything is written back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of stages in every curriculum level.
pub const STAGES_PER_LEVEL: u8 = 10;

/// A learner account with identity and owned progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearnerAccount {
    /// Opaque account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact handle; unique across accounts, case-insensitively.
    pub email: String,
    /// Stored as provided; hashing policy is outside this crate.
    pub password: String,
    /// When the account was created.
    pub joined_at: DateTime<Utc>,
    /// The learner's progression state.
    pub progress: LearnerProgress,
}

impl LearnerAccount {
    /// Create a new account with fresh progress.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            joined_at: now,
            progress: LearnerProgress::new(now),
        }
    }
}

/// Progression state for a single learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearnerProgress {
    /// Highest level unlocked for play. Never decreases.
    pub current_level: u32,
    /// Completed-stage count per level id, each value in `[0, 10]`.
    pub level_progress: BTreeMap<u32, u8>,
    /// Cumulative experience points. Never decreases.
    pub xp: u64,
    /// Consecutive calendar days with reconciled activity. At least 1.
    pub streak: u32,
    /// When progress was last reconciled or mutated.
    pub last_activity_at: DateTime<Utc>,
    /// Deduplicated, append-only vocabulary ledger (unique by word text).
    pub vocabulary: Vec<VocabularyEntry>,
}

impl LearnerProgress {
    /// Fresh progress for a brand-new learner.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            current_level: 1,
            level_progress: BTreeMap::new(),
            xp: 0,
            streak: 1,
            last_activity_at: now,
            vocabulary: Vec::new(),
        }
    }

    /// Completed-stage count for a level (0 if never played).
    pub fn stages_completed(&self, level_id: u32) -> u8 {
        self.level_progress.get(&level_id).copied().unwrap_or(0)
    }

    /// Whether a level is unlocked for play.
    pub fn is_unlocked(&self, level_id: u32) -> bool {
        level_id <= self.current_level
    }

    /// Whether a level has been fully completed.
    pub fn is_completed(&self, level_id: u32) -> bool {
        self.stages_completed(level_id) >= STAGES_PER_LEVEL
    }
}

/// A single learned word in the vocabulary ledger.
///
/// Immutable once created; re-encountering a known word never updates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabularyEntry {
    /// The word text. Dedup key for the ledger.
    pub word: String,
    /// Latin transliteration.
    pub transliteration: String,
    /// Meaning in the learner's language.
    pub meaning: String,
    /// Level the word was first learned at.
    pub learned_at_level: u32,
    /// When the word was first learned.
    pub learned_at: DateTime<Utc>,
}

/// Word metadata produced by the content provider for one quiz item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordMetadata {
    pub word: String,
    pub transliteration: String,
    pub meaning: String,
}

impl WordMetadata {
    pub fn new(
        word: impl Into<String>,
        transliteration: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            transliteration: transliteration.into(),
            meaning: meaning.into(),
        }
    }
}
