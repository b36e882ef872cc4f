//! Leaderboard synthesis for Saffron.
//!
//! The leaderboard is ephemeral: a fixed roster of synthetic competitors is
//! re-rolled around the learner's xp on every call, so successive calls may
//! order competitors differently. That liveliness is intentional; only the
//! structural invariants (rank permutation, descending xp, exact learner
//! entry) are stable, and tests pin the jitter with an injected RNG.

use rand::Rng;
use serde::Serialize;

use crate::config::LeaderboardConfig;

/// A single derived leaderboard row. Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position after sorting.
    pub rank: u32,
    /// Display name.
    pub name: String,
    /// Displayed xp (competitors are jittered, the learner is exact).
    pub xp: u64,
    /// Whether this row is the learner's own.
    pub is_learner: bool,
    /// Visual tag for rendering layers.
    pub tag: String,
}

/// A synthetic competitor in the fixed roster.
struct Competitor {
    name: &'static str,
    base_offset: i64,
    tag: &'static str,
}

/// The fixed competitor roster. Base offsets keep the board competitive at
/// any learner xp.
const ROSTER: [Competitor; 5] = [
    Competitor {
        name: "Sarah K.",
        base_offset: 50,
        tag: "blue",
    },
    Competitor {
        name: "Amir M.",
        base_offset: 120,
        tag: "green",
    },
    Competitor {
        name: "John D.",
        base_offset: 300,
        tag: "purple",
    },
    Competitor {
        name: "Elena R.",
        base_offset: 450,
        tag: "orange",
    },
    Competitor {
        name: "Wei L.",
        base_offset: 80,
        tag: "red",
    },
];

/// Tag used for the learner's own row.
const LEARNER_TAG: &str = "emerald";

/// Synthesize a ranked board with the default RNG.
pub fn synthesize(
    learner_name: &str,
    learner_xp: u64,
    config: &LeaderboardConfig,
) -> Vec<LeaderboardEntry> {
    synthesize_with(learner_name, learner_xp, config, &mut rand::thread_rng())
}

/// Synthesize a ranked board with a caller-supplied RNG.
///
/// Competitor xp is `max(floor, learner_xp + jitter + base_offset)` with
/// jitter drawn symmetrically from `[-jitter, jitter]`. The learner's row
/// uses its exact xp. Entries are stably sorted by xp descending, so ties
/// keep roster order (the learner last among equals).
pub fn synthesize_with<R: Rng + ?Sized>(
    learner_name: &str,
    learner_xp: u64,
    config: &LeaderboardConfig,
    rng: &mut R,
) -> Vec<LeaderboardEntry> {
    let jitter = i64::from(config.jitter);
    let floor = u64::from(config.floor_xp);

    let mut entries: Vec<LeaderboardEntry> = ROSTER
        .iter()
        .map(|competitor| {
            let roll = rng.gen_range(-jitter..=jitter);
            let xp = (learner_xp as i64 + roll + competitor.base_offset).max(floor as i64) as u64;
            LeaderboardEntry {
                rank: 0,
                name: competitor.name.to_string(),
                xp,
                is_learner: false,
                tag: competitor.tag.to_string(),
            }
        })
        .collect();

    entries.push(LeaderboardEntry {
        rank: 0,
        name: learner_name.to_string(),
        xp: learner_xp,
        is_learner: true,
        tag: LEARNER_TAG.to_string(),
    });

    entries.sort_by(|a, b| b.xp.cmp(&a.xp));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    entries
}
