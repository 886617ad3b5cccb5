//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotJournalDirectory(_) => 2,
            MoodjourError::InvalidDate(_) => 3,
            MoodjourError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • Specific dates: DD-MM-YYYY (e.g., 17-01-2025)\n\n\
                    Examples:\n\
                    moodjour add --date yesterday --title Walk --mood Calm\n\
                    moodjour on 17-01-2025",
                    input
                )
            }
            MoodjourError::EntryNotFound(id) => {
                format!(
                    "No entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'moodjour list' to see entry ids\n\
                    • Use 'moodjour search <text>' to find an entry",
                    id
                )
            }
            MoodjourError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodjour config top_tags 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
