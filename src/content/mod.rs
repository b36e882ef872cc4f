//! Content and pronunciation collaborator interfaces for Saffron.
//!
//! Lesson and quiz material is generated by an external provider; this
//! module only defines the exchange types and traits. Transport, prompt
//! construction and audio playback live outside the crate.
//!
//! Quiz items optionally carry the vocabulary word they teach. Absence of
//! that field is normal (not every question introduces a word) and is
//! handled by skipping the item during vocabulary extraction.

use serde::{Deserialize, Serialize};

use crate::core::WordMetadata;
use crate::curriculum::DifficultyTier;
use crate::error::Result;

/// Request for one stage worth of lesson or quiz material.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LessonRequest {
    /// Level topic, from the curriculum descriptor.
    pub topic: String,
    /// Level difficulty tier.
    pub tier: DifficultyTier,
    /// Stage within the level, 1 to 10.
    pub stage: u8,
    /// Language the learner reads explanations in.
    pub language: String,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizItem {
    /// Question text.
    pub question: String,
    /// Answer options.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct_index: usize,
    /// Shown after answering.
    pub explanation: String,
    /// Text to hand to the pronunciation collaborator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation_text: Option<String>,
    /// The vocabulary word this question teaches, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_metadata: Option<WordMetadata>,
}

/// A grammar teaching point in a handout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrammarPoint {
    pub title: String,
    pub content: String,
}

/// An example sentence in a handout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExampleSentence {
    /// The sentence in the target script.
    pub text: String,
    pub transliteration: String,
    pub translation: String,
}

/// Structured lesson handout: the "lecture" half of a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonHandout {
    pub title: String,
    pub introduction: String,
    pub vocabulary: Vec<WordMetadata>,
    pub grammar: Vec<GrammarPoint>,
    pub sentences: Vec<ExampleSentence>,
    pub cultural_note: String,
}

/// External generator of lesson and quiz material.
///
/// Calls are blocking round-trips; retry and timeout policy belongs to the
/// caller, not the core.
pub trait ContentProvider {
    /// Generate the quiz for a stage.
    fn quiz(&self, request: &LessonRequest) -> Result<Vec<QuizItem>>;

    /// Generate the handout for a stage.
    fn handout(&self, request: &LessonRequest) -> Result<LessonHandout>;
}

/// External text-to-speech collaborator. Fire-and-forget: produces no data
/// the core consumes.
pub trait Pronouncer {
    fn pronounce(&self, text: &str) -> Result<()>;
}

/// Pronouncer that discards all requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPronouncer;

impl Pronouncer for SilentPronouncer {
    fn pronounce(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Collect the vocabulary candidates a completed quiz session produced.
///
/// Items without word metadata simply contribute nothing; the merge in
/// `core::vocabulary` handles duplicates.
pub fn session_words(items: &[QuizItem]) -> Vec<WordMetadata> {
    items
        .iter()
        .filter_map(|item| item.word_metadata.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(word: Option<WordMetadata>) -> QuizItem {
        QuizItem {
            question: "چطور می\u{200c}گویید «سلام»؟".to_string(),
            options: vec!["salâm".into(), "xodâhâfez".into(), "merci".into(), "na".into()],
            correct_index: 0,
            explanation: "«سلام» is the everyday greeting.".to_string(),
            pronunciation_text: Some("سلام".to_string()),
            word_metadata: word,
        }
    }

    #[test]
    fn test_session_words_collects_present_metadata() {
        let items = vec![
            item(Some(WordMetadata::new("سلام", "salâm", "hello"))),
            item(Some(WordMetadata::new("آب", "âb", "water"))),
        ];

        let words = session_words(&items);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "سلام");
        assert_eq!(words[1].word, "آب");
    }

    #[test]
    fn test_absent_metadata_is_skipped_not_an_error() {
        let items = vec![
            item(Some(WordMetadata::new("سلام", "salâm", "hello"))),
            item(None),
            item(Some(WordMetadata::new("آب", "âb", "water"))),
            item(None),
        ];

        let words = session_words(&items);

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_all_absent_yields_empty_batch() {
        let items = vec![item(None), item(None)];
        assert!(session_words(&items).is_empty());
    }

    #[test]
    fn test_quiz_item_deserializes_without_optional_fields() {
        // Provider output with the optional fields missing entirely.
        let json = r#"{
            "question": "q",
            "options": ["a", "b", "c", "d"],
            "correct_index": 2,
            "explanation": "e"
        }"#;

        let parsed: QuizItem = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.correct_index, 2);
        assert!(parsed.pronunciation_text.is_none());
        assert!(parsed.word_metadata.is_none());
    }

    #[test]
    fn test_quiz_item_roundtrip_with_metadata() {
        let original = item(Some(WordMetadata::new("نان", "nân", "bread")));

        let json = serde_json::to_string(&original).unwrap();
        let parsed: QuizItem = serde_json::from_str(&json).unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn test_handout_roundtrip() {
        let handout = LessonHandout {
            title: "Greetings".to_string(),
            introduction: "How Persians greet each other.".to_string(),
            vocabulary: vec![WordMetadata::new("سلام", "salâm", "hello")],
            grammar: vec![GrammarPoint {
                title: "Politeness".to_string(),
                content: "Use «شما» with strangers.".to_string(),
            }],
            sentences: vec![ExampleSentence {
                text: "سلام، حال شما چطور است؟".to_string(),
                transliteration: "salâm, hâl-e šomâ četor ast?".to_string(),
                translation: "Hello, how are you?".to_string(),
            }],
            cultural_note: "Ta'ârof shapes everyday politeness.".to_string(),
        };

        let json = serde_json::to_string_pretty(&handout).unwrap();
        let parsed: LessonHandout = serde_json::from_str(&json).unwrap();

        assert_eq!(handout, parsed);
    }

    #[test]
    fn test_silent_pronouncer_accepts_anything() {
        let pronouncer = SilentPronouncer;
        assert!(pronouncer.pronounce("سلام").is_ok());
        assert!(pronouncer.pronounce("").is_ok());
    }
}
