//! Domain layer - Journal entries, moods and statistics

pub mod analytics;
pub mod date_ref;
pub mod entry;
pub mod mood;
pub mod theme;

pub use analytics::{JournalStats, MoodCount, MoodDistribution, StreakStats, TagCount};
pub use date_ref::DateReference;
pub use entry::JournalEntry;
pub use mood::MoodCategory;
pub use theme::Theme;
