//! Vocabulary ledger merge for Saffron.
//!
//! The ledger is append-only and deduplicated by exact word text. Merging
//! never touches existing entries; re-learned words are dropped silently.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::account::{VocabularyEntry, WordMetadata};

/// Merge candidate words into an existing ledger.
///
/// Existing entries keep their order and are never updated. Candidates not
/// yet present are appended in batch order, stamped with the level they were
/// learned at and the merge time. Duplicates within the candidate batch
/// collapse to their first occurrence.
pub fn merge(
    existing: &[VocabularyEntry],
    candidates: &[WordMetadata],
    level_id: u32,
    now: DateTime<Utc>,
) -> Vec<VocabularyEntry> {
    let mut seen: HashSet<&str> = existing.iter().map(|e| e.word.as_str()).collect();
    let mut merged = existing.to_vec();

    for candidate in candidates {
        if !seen.insert(candidate.word.as_str()) {
            continue;
        }
        merged.push(VocabularyEntry {
            word: candidate.word.clone(),
            transliteration: candidate.transliteration.clone(),
            meaning: candidate.meaning.clone(),
            learned_at_level: level_id,
            learned_at: now,
        });
    }

    merged
}
