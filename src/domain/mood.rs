//! Mood taxonomy and categorization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a mood belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
    /// Any mood name outside the taxonomy
    Unknown,
}

/// Fixed taxonomy, in display order
static TAXONOMY: [(MoodCategory, [&str; 5]); 3] = [
    (
        MoodCategory::Positive,
        ["Happy", "Excited", "Relaxed", "Grateful", "Confident"],
    ),
    (
        MoodCategory::Neutral,
        ["Calm", "Thoughtful", "Curious", "Nostalgic", "Bored"],
    ),
    (
        MoodCategory::Negative,
        ["Sad", "Angry", "Stressed", "Lonely", "Anxious"],
    ),
];

impl MoodCategory {
    /// The three categories that can hold moods
    pub const KNOWN: [MoodCategory; 3] = [
        MoodCategory::Positive,
        MoodCategory::Neutral,
        MoodCategory::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Negative => "Negative",
            MoodCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Look up the category of a mood name. Matching is exact.
pub fn category_of(mood: &str) -> MoodCategory {
    TAXONOMY
        .iter()
        .find(|(_, moods)| moods.iter().any(|m| *m == mood))
        .map(|(category, _)| *category)
        .unwrap_or(MoodCategory::Unknown)
}

/// Moods of a single category (empty for `Unknown`)
pub fn moods_in(category: MoodCategory) -> &'static [&'static str] {
    TAXONOMY
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, moods)| moods.as_slice())
        .unwrap_or(&[])
}

/// All moods, category order then intra-category order
pub fn all_moods() -> Vec<&'static str> {
    TAXONOMY
        .iter()
        .flat_map(|(_, moods)| moods.iter().copied())
        .collect()
}

/// Emoji shown next to a mood
pub fn emoji_for(mood: &str) -> &'static str {
    match mood {
        "Happy" => "😊",
        "Excited" => "🤩",
        "Relaxed" => "😌",
        "Grateful" => "🙏",
        "Confident" => "💪",
        "Calm" => "😐",
        "Thoughtful" => "🤔",
        "Curious" => "🧐",
        "Nostalgic" => "💭",
        "Bored" => "😑",
        "Sad" => "😢",
        "Angry" => "😠",
        "Stressed" => "😰",
        "Lonely" => "😔",
        "Anxious" => "😟",
        _ => "📝",
    }
}
