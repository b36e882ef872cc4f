//! Levels command for Saffron.
//!
//! Renders the static curriculum against the learner's per-level progress.

use serde::Serialize;

use crate::core::STAGES_PER_LEVEL;
use crate::curriculum::CURRICULUM;
use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// One curriculum row joined with progress.
#[derive(Debug, Clone, Serialize)]
pub struct LevelRow {
    pub id: u32,
    pub title: String,
    pub tier: String,
    /// Completed stages, 0 to 10.
    pub stages_completed: u8,
    pub unlocked: bool,
    pub completed: bool,
}

/// Output format for the levels command.
#[derive(Debug, Clone, Serialize)]
pub struct LevelsOutput {
    /// Frontier level.
    pub current_level: u32,
    /// All curriculum rows in play order.
    pub levels: Vec<LevelRow>,
}

/// The levels command implementation.
pub struct LevelsCommand<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> LevelsCommand<S> {
    /// Create a new levels command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the levels command.
    pub fn run(&self, account_id: &str) -> Result<LevelsOutput> {
        let account = self
            .store
            .get(account_id)?
            .ok_or_else(|| SaffronError::account_not_found(account_id))?;

        let levels = CURRICULUM
            .iter()
            .map(|descriptor| LevelRow {
                id: descriptor.id,
                title: descriptor.title.to_string(),
                tier: descriptor.tier.label().to_string(),
                stages_completed: account.progress.stages_completed(descriptor.id),
                unlocked: account.progress.is_unlocked(descriptor.id),
                completed: account.progress.is_completed(descriptor.id),
            })
            .collect();

        Ok(LevelsOutput {
            current_level: account.progress.current_level,
            levels,
        })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &LevelsOutput, json: bool) -> String {
        if json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }

        let mut text = String::new();
        for row in &output.levels {
            let status = if row.completed {
                "done".to_string()
            } else if row.unlocked {
                format!("{}/{}", row.stages_completed, STAGES_PER_LEVEL)
            } else {
                "locked".to_string()
            };
            let marker = if row.id == output.current_level {
                "▶"
            } else {
                " "
            };
            text.push_str(&format!(
                "{} {:>2}. {:<16} {:<12} {}\n",
                marker, row.id, row.title, row.tier, status
            ));
        }
        text
    }
}
