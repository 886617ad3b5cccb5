//! Output formatting utilities

use crate::domain::analytics::JournalStats;
use crate::domain::mood::{self, MoodCategory};
use crate::domain::JournalEntry;

/// One line per entry: date, id, mood and title
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  #{:<4} {} {:<10} {}\n",
            entry.entry_date.format("%d-%m-%Y"),
            entry.id,
            mood::emoji_for(&entry.primary_mood),
            entry.primary_mood,
            entry.title
        ));
    }
    output
}

/// Full view of a single entry
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!(
        "#{} {}\n{}\n",
        entry.id,
        entry.title,
        entry.entry_date.format("%A, %d %B %Y")
    );

    output.push_str(&format!(
        "Mood: {} {} ({})\n",
        mood::emoji_for(&entry.primary_mood),
        entry.primary_mood,
        mood::category_of(&entry.primary_mood)
    ));

    let secondary: Vec<&str> = entry.secondary_moods().collect();
    if !secondary.is_empty() {
        output.push_str(&format!("Also: {}\n", secondary.join(", ")));
    }
    if let Some(category) = &entry.category {
        output.push_str(&format!("Category: {}\n", category));
    }
    if !entry.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", entry.tags.join(", ")));
    }

    output.push_str(&format!(
        "Words: {}  Created: {}  Updated: {}\n",
        entry.word_count,
        entry.created_at.format("%d-%m-%Y %H:%M"),
        entry.updated_at.format("%d-%m-%Y %H:%M")
    ));

    if !entry.content.is_empty() {
        output.push('\n');
        output.push_str(&entry.content);
        output.push('\n');
    }

    output
}

pub fn format_stats(stats: &JournalStats) -> String {
    let mut output = format!("Entries: {}\n", stats.total_entries);

    output.push_str("\nMoods:\n");
    for (category, count) in stats.mood_distribution.iter() {
        output.push_str(&format!("  {:<9} {}\n", category, count));
    }
    output.push_str(&format!(
        "  Most frequent: {} ({})\n",
        stats.most_frequent_mood.mood, stats.most_frequent_mood.count
    ));

    output.push_str(&format!(
        "\nAverage words: {:.1}\n",
        stats.average_word_count
    ));

    output.push_str(&format!(
        "\nStreaks:\n  Current: {}\n  Longest: {}\n  Missed:  {}\n",
        stats.streaks.current, stats.streaks.longest, stats.streaks.missed
    ));

    output.push_str("\nTop tags:\n");
    if stats.top_tags.is_empty() {
        output.push_str("  (none)\n");
    }
    for tag in &stats.top_tags {
        output.push_str(&format!("  {} ({})\n", tag.tag, tag.count));
    }

    output
}

/// Moods grouped by category
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for category in MoodCategory::KNOWN {
        let moods: Vec<String> = mood::moods_in(category)
            .iter()
            .map(|m| format!("{} {}", mood::emoji_for(m), m))
            .collect();
        output.push_str(&format!("{}: {}\n", category, moods.join(", ")));
    }
    output
}
