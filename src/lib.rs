//! moodjour - Mood journal data layer
//!
//! Stores dated journal entries with mood tags in a local JSON file and
//! derives statistics from them: mood distribution, most frequent mood, tag
//! frequency, average word count and writing streaks.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
