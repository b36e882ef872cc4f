//! Home command for Saffron.
//!
//! The home view: level, xp, streak, ledger size and the synthesized
//! leaderboard. A pure read; nothing is persisted, and the board is
//! re-rolled on every call.

use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::core::{leaderboard, LeaderboardEntry};
use crate::curriculum;
use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// Output format for the home command.
#[derive(Debug, Clone, Serialize)]
pub struct HomeOutput {
    /// Display name.
    pub name: String,
    /// Frontier level.
    pub current_level: u32,
    /// Title of the frontier level, if it exists in the curriculum.
    pub level_title: Option<String>,
    /// Total experience.
    pub xp: u64,
    /// Activity streak in days.
    pub streak: u32,
    /// Ledger size.
    pub words_learned: usize,
    /// Synthesized competitive board, best first.
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// The home command implementation.
pub struct HomeCommand<S: AccountStore> {
    store: S,
    config: Config,
}

impl<S: AccountStore> HomeCommand<S> {
    /// Create a new home command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the home command.
    pub fn run(&self, account_id: &str) -> Result<HomeOutput> {
        self.run_with_rng(account_id, &mut rand::thread_rng())
    }

    /// Run the home command with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, account_id: &str, rng: &mut R) -> Result<HomeOutput> {
        let account = self
            .store
            .get(account_id)?
            .ok_or_else(|| SaffronError::account_not_found(account_id))?;

        let board = leaderboard::synthesize_with(
            &account.name,
            account.progress.xp,
            &self.config.leaderboard,
            rng,
        );

        Ok(HomeOutput {
            name: account.name,
            current_level: account.progress.current_level,
            level_title: curriculum::level(account.progress.current_level)
                .map(|l| l.title.to_string()),
            xp: account.progress.xp,
            streak: account.progress.streak,
            words_learned: account.progress.vocabulary.len(),
            leaderboard: board,
        })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &HomeOutput, json: bool) -> String {
        if json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }

        let mut text = format!(
            "{} — level {}{}\n{} xp · {} day streak · {} words\n\nLeaderboard:\n",
            output.name,
            output.current_level,
            output
                .level_title
                .as_deref()
                .map(|t| format!(" ({t})"))
                .unwrap_or_default(),
            output.xp,
            output.streak,
            output.words_learned,
        );

        for entry in &output.leaderboard {
            let marker = if entry.is_learner { " ← you" } else { "" };
            text.push_str(&format!(
                "  {:>2}. {:<10} {:>6} xp{}\n",
                entry.rank, entry.name, entry.xp, marker
            ));
        }

        text
    }
}
