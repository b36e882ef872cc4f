//! Saffron - Persian language-learning progression tracker
//!
//! Saffron tracks a single learner's path through a leveled curriculum:
//! stage completions, experience points, a calendar-day activity streak, a
//! deduplicated vocabulary ledger and a synthesized competitive
//! leaderboard. Lesson content comes from an external provider; this crate
//! owns the progression rules and their persistence.

pub mod accounts;
pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod curriculum;
pub mod error;
pub mod storage;

pub use config::Config;
pub use content::{
    ContentProvider, LessonHandout, LessonRequest, Pronouncer, QuizItem, SilentPronouncer,
};
pub use core::{
    apply_stage_completion, reconcile, synthesize, synthesize_with, LeaderboardEntry,
    LearnerAccount, LearnerProgress, StageOutcome, StreakChange, VocabularyEntry, WordMetadata,
    STAGES_PER_LEVEL,
};
pub use curriculum::{DifficultyTier, LevelDescriptor, CURRICULUM};
pub use error::{Result, SaffronError};
pub use storage::{AccountStore, FileAccountStore, MemoryAccountStore, SessionPointer};

// CLI commands
pub use cli::{
    CompleteCommand, HomeCommand, LevelsCommand, LoginCommand, LogoutCommand, SignupCommand,
    VocabCommand,
};
