//! Journal entry model

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One journal record for a given date.
///
/// Serialized with PascalCase keys so journal files written by earlier
/// versions of the app load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub id: u32,
    #[serde(with = "date_only")]
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub primary_mood: String,
    #[serde(default)]
    pub secondary_mood1: Option<String>,
    #[serde(default)]
    pub secondary_mood2: Option<String>,
    /// Free-text category override
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub word_count: usize,
    #[serde(with = "local_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "local_timestamp")]
    pub updated_at: NaiveDateTime,
}

impl JournalEntry {
    /// Create an unsaved entry. Id, word count and timestamps are
    /// reassigned by the store when the entry is added.
    pub fn new(
        entry_date: NaiveDate,
        title: impl Into<String>,
        content: impl Into<String>,
        primary_mood: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local();
        JournalEntry {
            id: 0,
            entry_date,
            title: title.into(),
            content: content.into(),
            primary_mood: primary_mood.into(),
            secondary_mood1: None,
            secondary_mood2: None,
            category: None,
            tags: Vec::new(),
            word_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Secondary moods that are set, in order
    pub fn secondary_moods(&self) -> impl Iterator<Item = &str> {
        self.secondary_mood1
            .as_deref()
            .into_iter()
            .chain(self.secondary_mood2.as_deref())
    }

    /// Case-insensitive substring match on title, content and tags.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Count words separated by spaces, newlines, carriage returns or tabs
pub fn count_words(text: &str) -> usize {
    text.split([' ', '\n', '\r', '\t'])
        .filter(|token| !token.is_empty())
        .count()
}

/// `EntryDate` is written as `YYYY-MM-DD`. Older files store a full
/// date-time; only its date part is kept.
mod date_only {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid entry date '{}': {}", raw, e)))
    }
}

/// Timestamps are local wall-clock times. Files from earlier versions of the
/// app may carry a UTC offset (`2025-01-17T09:30:12.1234567+01:00`); the
/// offset is dropped and the local time kept.
mod local_timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.naive_local())
            .or_else(|_| raw.parse::<NaiveDateTime>())
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}
