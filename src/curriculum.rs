//! Static curriculum metadata for Saffron.
//!
//! Level descriptors are read-only input to the progression engine; nothing
//! in this crate mutates them. Each level holds exactly
//! [`STAGES_PER_LEVEL`](crate::core::STAGES_PER_LEVEL) ordered stages.

use serde::Serialize;

/// Difficulty tier of a curriculum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Foundation,
    Beginner,
    Intermediate,
    Advanced,
    Fluency,
}

impl DifficultyTier {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyTier::Foundation => "Foundation",
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
            DifficultyTier::Fluency => "Fluency",
        }
    }
}

/// Static metadata for one curriculum level.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LevelDescriptor {
    /// Level identifier, 1-based and contiguous.
    pub id: u32,
    /// Display title.
    pub title: &'static str,
    /// Topic handed to the content provider.
    pub topic: &'static str,
    /// Difficulty tier handed to the content provider.
    pub tier: DifficultyTier,
}

/// The full curriculum, in play order.
pub const CURRICULUM: [LevelDescriptor; 10] = [
    LevelDescriptor {
        id: 1,
        title: "The Alphabet",
        topic: "Persian script, letters and sounds",
        tier: DifficultyTier::Foundation,
    },
    LevelDescriptor {
        id: 2,
        title: "Greetings",
        topic: "Greetings, introductions and politeness",
        tier: DifficultyTier::Foundation,
    },
    LevelDescriptor {
        id: 3,
        title: "Numbers & Time",
        topic: "Numbers, dates and telling the time",
        tier: DifficultyTier::Beginner,
    },
    LevelDescriptor {
        id: 4,
        title: "Family & People",
        topic: "Family members and describing people",
        tier: DifficultyTier::Beginner,
    },
    LevelDescriptor {
        id: 5,
        title: "Food & Dining",
        topic: "Food, drink and eating out",
        tier: DifficultyTier::Intermediate,
    },
    LevelDescriptor {
        id: 6,
        title: "Around Town",
        topic: "Travel, directions and places in the city",
        tier: DifficultyTier::Intermediate,
    },
    LevelDescriptor {
        id: 7,
        title: "Daily Life",
        topic: "Routines, work and the home",
        tier: DifficultyTier::Advanced,
    },
    LevelDescriptor {
        id: 8,
        title: "Stories & Past",
        topic: "Past tenses and telling stories",
        tier: DifficultyTier::Advanced,
    },
    LevelDescriptor {
        id: 9,
        title: "Poetry & Culture",
        topic: "Persian poetry, idioms and culture",
        tier: DifficultyTier::Fluency,
    },
    LevelDescriptor {
        id: 10,
        title: "Conversation",
        topic: "Colloquial conversation and nuance",
        tier: DifficultyTier::Fluency,
    },
];

/// Look up a level descriptor by id.
pub fn level(id: u32) -> Option<&'static LevelDescriptor> {
    CURRICULUM.iter().find(|l| l.id == id)
}
