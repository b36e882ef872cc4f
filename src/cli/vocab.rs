//! Vocabulary command for Saffron.
//!
//! Lists the learner's word ledger, optionally filtered.

use serde::Serialize;

use crate::error::{Result, SaffronError};
use crate::storage::AccountStore;

/// One displayed ledger row.
#[derive(Debug, Clone, Serialize)]
pub struct VocabRow {
    pub word: String,
    pub transliteration: String,
    pub meaning: String,
    pub learned_at_level: u32,
}

/// Output format for the vocab command.
#[derive(Debug, Clone, Serialize)]
pub struct VocabOutput {
    /// Total ledger size before filtering.
    pub total: usize,
    /// Rows matching the filter, in ledger order.
    pub entries: Vec<VocabRow>,
}

/// The vocab command implementation.
pub struct VocabCommand<S: AccountStore> {
    store: S,
}

impl<S: AccountStore> VocabCommand<S> {
    /// Create a new vocab command.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run the vocab command.
    ///
    /// The filter matches the word text exactly and the transliteration
    /// and meaning case-insensitively, as a substring.
    pub fn run(&self, account_id: &str, filter: Option<&str>) -> Result<VocabOutput> {
        let account = self
            .store
            .get(account_id)?
            .ok_or_else(|| SaffronError::account_not_found(account_id))?;

        let total = account.progress.vocabulary.len();
        let needle = filter.map(|f| f.to_lowercase());

        let entries = account
            .progress
            .vocabulary
            .iter()
            .filter(|entry| match &needle {
                None => true,
                Some(needle) => {
                    entry.word.contains(needle.as_str())
                        || entry.transliteration.to_lowercase().contains(needle)
                        || entry.meaning.to_lowercase().contains(needle)
                }
            })
            .map(|entry| VocabRow {
                word: entry.word.clone(),
                transliteration: entry.transliteration.clone(),
                meaning: entry.meaning.clone(),
                learned_at_level: entry.learned_at_level,
            })
            .collect();

        Ok(VocabOutput { total, entries })
    }

    /// Format output for display.
    pub fn format_output(&self, output: &VocabOutput, json: bool) -> String {
        if json {
            return serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string());
        }

        if output.entries.is_empty() {
            return if output.total == 0 {
                "No words learned yet. Complete a stage to start your ledger.\n".to_string()
            } else {
                "No words match.\n".to_string()
            };
        }

        let mut text = format!("{} of {} words:\n", output.entries.len(), output.total);
        for row in &output.entries {
            text.push_str(&format!(
                "  {}  ({})  — {}  [level {}]\n",
                row.word, row.transliteration, row.meaning, row.learned_at_level
            ));
        }
        text
    }
}
