//! Aggregate statistics over journal entries
//!
//! Everything here is a pure function over a borrowed slice of entries.
//! Where counts tie, the group encountered first in collection order wins.

use crate::domain::entry::JournalEntry;
use crate::domain::mood::{category_of, MoodCategory};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Default number of tags reported by [`most_used_tags`]
pub const DEFAULT_TAG_LIMIT: usize = 10;

/// Reported missed days never exceed this
pub const MAX_REPORTED_MISSED_DAYS: u32 = 30;

/// Mood name reported when there are no entries
pub const NO_MOOD: &str = "None";

/// Entry counts per mood category. Unknown moods are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl MoodDistribution {
    pub fn count(&self, category: MoodCategory) -> usize {
        match category {
            MoodCategory::Positive => self.positive,
            MoodCategory::Neutral => self.neutral,
            MoodCategory::Negative => self.negative,
            MoodCategory::Unknown => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// (category, count) pairs in taxonomy order
    pub fn iter(&self) -> impl Iterator<Item = (MoodCategory, usize)> + '_ {
        MoodCategory::KNOWN.into_iter().map(|c| (c, self.count(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStats {
    /// Consecutive-day run ending today or yesterday
    pub current: u32,
    pub longest: u32,
    /// Days without an entry inside gaps, capped at 30
    pub missed: u32,
}

/// Everything the dashboard shows at once
#[derive(Debug, Clone, PartialEq)]
pub struct JournalStats {
    pub total_entries: usize,
    pub mood_distribution: MoodDistribution,
    pub most_frequent_mood: MoodCount,
    pub top_tags: Vec<TagCount>,
    pub average_word_count: f64,
    pub streaks: StreakStats,
}

impl JournalStats {
    pub fn compute(entries: &[JournalEntry], today: NaiveDate, tag_limit: usize) -> Self {
        JournalStats {
            total_entries: entries.len(),
            mood_distribution: mood_distribution(entries),
            most_frequent_mood: most_frequent_mood(entries),
            top_tags: most_used_tags(entries, tag_limit),
            average_word_count: average_word_count(entries),
            streaks: calculate_streaks(entries, today),
        }
    }
}

/// Count entries per category of their primary mood
pub fn mood_distribution(entries: &[JournalEntry]) -> MoodDistribution {
    let mut distribution = MoodDistribution::default();

    for entry in entries {
        match category_of(&entry.primary_mood) {
            MoodCategory::Positive => distribution.positive += 1,
            MoodCategory::Neutral => distribution.neutral += 1,
            MoodCategory::Negative => distribution.negative += 1,
            MoodCategory::Unknown => {}
        }
    }

    distribution
}

/// Group keys in first-encountered order with their counts
fn count_in_order<'a, I>(keys: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Most common primary mood, `("None", 0)` when there are no entries
pub fn most_frequent_mood(entries: &[JournalEntry]) -> MoodCount {
    let counts = count_in_order(entries.iter().map(|e| e.primary_mood.as_str()));

    let mut best: Option<(&str, usize)> = None;
    for (mood, count) in counts {
        // Strictly greater keeps the earliest group on ties
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((mood, count));
        }
    }

    match best {
        Some((mood, count)) => MoodCount {
            mood: mood.to_string(),
            count,
        },
        None => MoodCount {
            mood: NO_MOOD.to_string(),
            count: 0,
        },
    }
}

/// Tags by descending use, blank tags excluded. Tags are compared exactly,
/// without trimming or case folding.
pub fn most_used_tags(entries: &[JournalEntry], limit: usize) -> Vec<TagCount> {
    let tags = entries
        .iter()
        .flat_map(|e| e.tags.iter())
        .map(String::as_str)
        .filter(|tag| !tag.trim().is_empty());

    let mut counts = count_in_order(tags);
    // Stable sort keeps first-encountered order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}

pub fn average_word_count(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: usize = entries.iter().map(|e| e.word_count).sum();
    total as f64 / entries.len() as f64
}

/// Writing streaks relative to `today`.
///
/// Walks distinct entry dates from newest to oldest. A break in the very
/// first pair zeroes the current streak, while a one-day step in the first
/// pair always extends it, even when the newest date is older than
/// yesterday. Later steps extend the current streak whenever it is positive,
/// including after an earlier break.
pub fn calculate_streaks(entries: &[JournalEntry], today: NaiveDate) -> StreakStats {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.entry_date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(&most_recent) = dates.first() else {
        return StreakStats::default();
    };

    let yesterday = today - Duration::days(1);
    let mut current: u32 = if most_recent == today || most_recent == yesterday {
        1
    } else {
        0
    };
    let mut longest: u32 = 0;
    let mut run: u32 = 1;
    let mut missed: i64 = 0;

    for (i, pair) in dates.windows(2).enumerate() {
        let gap = (pair[0] - pair[1]).num_days();

        if gap == 1 {
            run += 1;
            if i == 0 || current > 0 {
                current += 1;
            }
        } else {
            longest = longest.max(run);
            run = 1;
            if i == 0 {
                current = 0;
            }
            missed += gap - 1;
        }
    }

    longest = longest.max(run);

    StreakStats {
        current,
        longest,
        missed: missed.min(i64::from(MAX_REPORTED_MISSED_DAYS)) as u32,
    }
}
