//! Stage-completion command for Saffron.
//!
//! Applies the outcome of a finished practice stage to the learner's
//! persisted progress: stage recording, xp, vocabulary merge and the
//! frontier-level unlock. The full replacement record is computed before
//! the single write-back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::{session_words, QuizItem};
use crate::core::{apply_stage_completion, StageOutcome, WordMetadata};
use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// Output format for the complete command.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteOutput {
    /// Level the stage belonged to.
    pub level_id: u32,
    /// Recorded stage count for the level after the update.
    pub recorded_stage: u8,
    /// Whether this completion unlocked the next level.
    pub level_unlocked: bool,
    /// Frontier level after the update.
    pub current_level: u32,
    /// Experience earned this session.
    pub xp_gained: u32,
    /// Total experience after the update.
    pub xp_total: u64,
    /// Number of new words added to the ledger.
    pub words_added: usize,
}

/// The complete command implementation.
pub struct CompleteCommand<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> CompleteCommand<S> {
    /// Create a new complete command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the complete command with explicit word metadata.
    pub fn run(
        &self,
        account_id: &str,
        level_id: u32,
        stage: u8,
        xp_gained: u32,
        words: Vec<WordMetadata>,
        now: DateTime<Utc>,
    ) -> Result<CompleteOutput> {
        let mut account = self
            .store
            .get(account_id)?
            .ok_or_else(|| SaffronError::account_not_found(account_id))?;

        let outcome = StageOutcome {
            level_id,
            completed_stage: stage,
            xp_gained,
            words,
        };

        let prior_level = account.progress.current_level;
        let prior_words = account.progress.vocabulary.len();

        account.progress = apply_stage_completion(&account.progress, &outcome, now);
        self.store.put(&account)?;

        Ok(CompleteOutput {
            level_id,
            recorded_stage: account.progress.stages_completed(level_id),
            level_unlocked: account.progress.current_level > prior_level,
            current_level: account.progress.current_level,
            xp_gained,
            xp_total: account.progress.xp,
            words_added: account.progress.vocabulary.len() - prior_words,
        })
    }

    /// Run the complete command from a finished quiz.
    ///
    /// Items without word metadata contribute nothing to the vocabulary
    /// merge; absence is not an error.
    pub fn run_with_quiz(
        &self,
        account_id: &str,
        level_id: u32,
        stage: u8,
        xp_gained: u32,
        items: &[QuizItem],
        now: DateTime<Utc>,
    ) -> Result<CompleteOutput> {
        self.run(
            account_id,
            level_id,
            stage,
            xp_gained,
            session_words(items),
            now,
        )
    }

    /// Format output for display.
    pub fn format_output(&self, output: &CompleteOutput, json: bool) -> String {
        if json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            let mut lines = format!(
                "Stage recorded: level {} at {}/10.\n+{} xp ({} total), {} new word{}.\n",
                output.level_id,
                output.recorded_stage,
                output.xp_gained,
                output.xp_total,
                output.words_added,
                if output.words_added == 1 { "" } else { "s" },
            );
            if output.level_unlocked {
                lines.push_str(&format!("Level {} unlocked!\n", output.current_level));
            }
            lines
        }
    }
}
