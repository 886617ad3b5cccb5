//! In-memory entry store backed by a repository
//!
//! The store owns the entry collection. Every mutation rewrites the whole
//! collection through the repository before returning. Persistence is best
//! effort: a failed load starts an empty store and a failed save keeps the
//! in-memory change, both logged and never returned to the caller.

use crate::domain::analytics::{
    self, JournalStats, MoodCount, MoodDistribution, StreakStats, TagCount,
};
use crate::domain::entry::count_words;
use crate::domain::JournalEntry;
use crate::infrastructure::JournalRepository;
use chrono::{Local, NaiveDate};
use tracing::warn;

pub struct EntryStore<R: JournalRepository> {
    repository: R,
    entries: Vec<JournalEntry>,
    /// None once every id up to `u32::MAX` has been handed out
    next_id: Option<u32>,
}

impl<R: JournalRepository> EntryStore<R> {
    /// Load persisted entries. Any load failure yields an empty store.
    pub fn open(repository: R) -> Self {
        let entries = repository.load_entries().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load journal entries, starting empty");
            Vec::new()
        });
        let next_id = match entries.iter().map(|e| e.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        EntryStore {
            repository,
            entries,
            next_id,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Read-only view of the collection in storage order
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save_entries(&self.entries) {
            warn!(error = %err, "failed to save journal entries, keeping changes in memory");
        }
    }

    /// Store a new entry. Assigns its id, word count and timestamps, and
    /// writes them back onto `entry`.
    ///
    /// Returns false, storing nothing, when no unused id is left.
    pub fn add(&mut self, entry: &mut JournalEntry) -> bool {
        let Some(id) = self.next_id else {
            warn!("no entry ids left, entry not added");
            return false;
        };
        let now = Local::now().naive_local();

        entry.id = id;
        self.next_id = id.checked_add(1);
        entry.word_count = count_words(&entry.content);
        entry.created_at = now;
        entry.updated_at = now;

        self.entries.push(entry.clone());
        self.persist();
        true
    }

    /// Copy the editable fields of `entry` onto the stored entry with the
    /// same id. Returns false, changing nothing, when no such entry exists.
    pub fn update(&mut self, entry: &JournalEntry) -> bool {
        let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) else {
            return false;
        };

        existing.title = entry.title.clone();
        existing.content = entry.content.clone();
        existing.primary_mood = entry.primary_mood.clone();
        existing.secondary_mood1 = entry.secondary_mood1.clone();
        existing.secondary_mood2 = entry.secondary_mood2.clone();
        existing.category = entry.category.clone();
        existing.tags = entry.tags.clone();
        existing.word_count = count_words(&entry.content);
        existing.updated_at = Local::now().naive_local();

        self.persist();
        true
    }

    /// Remove the entry with `id`. Returns false when there was none.
    pub fn delete(&mut self, id: u32) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };

        self.entries.remove(pos);
        self.persist();
        true
    }

    /// All entries, newest entry date first. Equal dates keep storage order.
    pub fn all(&self) -> Vec<JournalEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        entries
    }

    pub fn by_date(&self, date: NaiveDate) -> Option<JournalEntry> {
        self.entries.iter().find(|e| e.entry_date == date).cloned()
    }

    pub fn by_id(&self, id: u32) -> Option<JournalEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    /// Entries whose title, content or tags contain `text`, ignoring case.
    /// Blank text matches everything.
    pub fn search(&self, text: &str) -> Vec<JournalEntry> {
        if text.trim().is_empty() {
            return self.all();
        }

        let needle = text.to_lowercase();
        let mut found: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.matches_lowercase(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        found
    }

    pub fn mood_distribution(&self) -> MoodDistribution {
        analytics::mood_distribution(&self.entries)
    }

    pub fn most_frequent_mood(&self) -> MoodCount {
        analytics::most_frequent_mood(&self.entries)
    }

    pub fn most_used_tags(&self, limit: usize) -> Vec<TagCount> {
        analytics::most_used_tags(&self.entries, limit)
    }

    pub fn average_word_count(&self) -> f64 {
        analytics::average_word_count(&self.entries)
    }

    /// Streaks relative to the local date
    pub fn streaks(&self) -> StreakStats {
        analytics::calculate_streaks(&self.entries, Local::now().date_naive())
    }

    pub fn stats(&self, tag_limit: usize) -> JournalStats {
        JournalStats::compute(&self.entries, Local::now().date_naive(), tag_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MoodjourError, Result};
    use crate::infrastructure::{Config, FileSystemRepository};
    use chrono::Duration;
    use std::cell::{Cell, RefCell};
    use std::fs;
    use tempfile::TempDir;

    /// Repository double that records saves and can be told to fail
    #[derive(Default)]
    struct MemoryRepository {
        stored: RefCell<Vec<JournalEntry>>,
        saves: Cell<usize>,
        fail_load: bool,
        fail_save: bool,
    }

    impl JournalRepository for MemoryRepository {
        fn load_entries(&self) -> Result<Vec<JournalEntry>> {
            if self.fail_load {
                return Err(MoodjourError::Config("load failed".to_string()));
            }
            Ok(self.stored.borrow().clone())
        }

        fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            if self.fail_save {
                return Err(MoodjourError::Io(std::io::Error::other("disk full")));
            }
            *self.stored.borrow_mut() = entries.to_vec();
            Ok(())
        }

        fn load_setting(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn save_setting(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, n).unwrap()
    }

    fn new_entry(date: NaiveDate, title: &str, content: &str, mood: &str) -> JournalEntry {
        JournalEntry::new(date, title, content, mood)
    }

    fn store_with(entries: &mut [JournalEntry]) -> EntryStore<MemoryRepository> {
        let mut store = EntryStore::open(MemoryRepository::default());
        for entry in entries.iter_mut() {
            assert!(store.add(entry));
        }
        store
    }

    #[test]
    fn test_open_empty_starts_ids_at_one() {
        let mut store = EntryStore::open(MemoryRepository::default());
        assert!(store.is_empty());

        let mut entry = new_entry(day(1), "First", "hello", "Happy");
        store.add(&mut entry);
        assert_eq!(entry.id, 1);
    }

    #[test]
    fn test_open_continues_after_max_id() {
        let mut stored = new_entry(day(1), "Old", "", "Calm");
        stored.id = 7;
        let repo = MemoryRepository {
            stored: RefCell::new(vec![stored]),
            ..Default::default()
        };

        let mut store = EntryStore::open(repo);
        let mut entry = new_entry(day(2), "New", "", "Calm");
        store.add(&mut entry);
        assert_eq!(entry.id, 8);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_id_space_exhausted_refuses_add() {
        let mut stored = new_entry(day(1), "Last", "", "Calm");
        stored.id = u32::MAX;
        let repo = MemoryRepository {
            stored: RefCell::new(vec![stored.clone()]),
            ..Default::default()
        };

        let mut store = EntryStore::open(repo);
        assert_eq!(store.by_id(u32::MAX), Some(stored));

        let mut entry = new_entry(day(2), "One too many", "", "Calm");
        assert!(!store.add(&mut entry));
        assert_eq!(entry.id, 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.repository().saves.get(), 0);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut stored = new_entry(day(1), "Almost", "", "Calm");
        stored.id = u32::MAX - 1;
        let repo = MemoryRepository {
            stored: RefCell::new(vec![stored]),
            ..Default::default()
        };

        let mut store = EntryStore::open(repo);
        let mut last = new_entry(day(2), "Last", "", "Calm");
        assert!(store.add(&mut last));
        assert_eq!(last.id, u32::MAX);

        let mut extra = new_entry(day(3), "Extra", "", "Calm");
        assert!(!store.add(&mut extra));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_open_recovers_from_load_failure() {
        let repo = MemoryRepository {
            fail_load: true,
            ..Default::default()
        };
        let store = EntryStore::open(repo);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_assigns_word_count_and_timestamps() {
        let mut entry = new_entry(day(3), "Walk", "a long  walk\nby the\tsea", "Relaxed");
        entry.word_count = 999;
        let store = store_with(std::slice::from_mut(&mut entry));

        let stored = store.by_id(entry.id).unwrap();
        assert_eq!(stored.word_count, 6);
        assert_eq!(stored.created_at, stored.updated_at);
        assert_eq!(stored, entry);
        assert_eq!(store.repository().saves.get(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut entries = vec![
            new_entry(day(1), "a", "", "Calm"),
            new_entry(day(1), "b", "", "Calm"),
            new_entry(day(2), "c", "", "Calm"),
        ];
        let store = store_with(&mut entries);
        let ids: Vec<u32> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_copies_fields_and_keeps_identity() {
        let mut entry = new_entry(day(3), "Draft", "one", "Sad");
        let mut store = store_with(std::slice::from_mut(&mut entry));
        let original = store.by_id(entry.id).unwrap();

        let mut changed = original.clone();
        changed.title = "Final".to_string();
        changed.content = "one two three".to_string();
        changed.primary_mood = "Happy".to_string();
        changed.secondary_mood1 = Some("Grateful".to_string());
        changed.category = Some("Travel".to_string());
        changed.tags = vec!["trip".to_string()];
        changed.word_count = 0;
        changed.created_at = original.created_at - Duration::days(10);
        changed.entry_date = day(9);

        assert!(store.update(&changed));

        let stored = store.by_id(entry.id).unwrap();
        assert_eq!(stored.title, "Final");
        assert_eq!(stored.primary_mood, "Happy");
        assert_eq!(stored.secondary_mood1.as_deref(), Some("Grateful"));
        assert_eq!(stored.category.as_deref(), Some("Travel"));
        assert_eq!(stored.tags, vec!["trip".to_string()]);
        assert_eq!(stored.word_count, 3);
        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(stored.entry_date, day(3));
        assert!(stored.updated_at >= original.updated_at);
        assert_eq!(store.repository().saves.get(), 2);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut entries = vec![new_entry(day(1), "a", "x", "Calm")];
        let mut store = store_with(&mut entries);
        let before = store.entries().to_vec();

        let mut ghost = new_entry(day(1), "ghost", "boo", "Sad");
        ghost.id = 42;
        assert!(!store.update(&ghost));

        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(store.repository().saves.get(), 1);
    }

    #[test]
    fn test_delete() {
        let mut entries = vec![
            new_entry(day(1), "a", "", "Calm"),
            new_entry(day(2), "b", "", "Calm"),
        ];
        let mut store = store_with(&mut entries);

        assert!(store.delete(entries[0].id));
        assert_eq!(store.len(), 1);
        assert!(store.by_id(entries[0].id).is_none());
        assert_eq!(store.repository().saves.get(), 3);
    }

    #[test]
    fn test_delete_missing_id_is_noop_without_save() {
        let mut entries = vec![new_entry(day(1), "a", "", "Calm")];
        let mut store = store_with(&mut entries);
        let before = store.entries().to_vec();

        assert!(!store.delete(99));
        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(store.repository().saves.get(), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let repo = MemoryRepository {
            fail_save: true,
            ..Default::default()
        };
        let mut store = EntryStore::open(repo);

        let mut entry = new_entry(day(1), "a", "kept anyway", "Calm");
        store.add(&mut entry);
        assert_eq!(store.len(), 1);
        assert!(store.repository().stored.borrow().is_empty());

        assert!(store.delete(entry.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_all_orders_by_date_desc_stable() {
        let mut entries = vec![
            new_entry(day(1), "oldest", "", "Calm"),
            new_entry(day(5), "first on 5th", "", "Calm"),
            new_entry(day(3), "middle", "", "Calm"),
            new_entry(day(5), "second on 5th", "", "Calm"),
        ];
        let store = store_with(&mut entries);

        let titles: Vec<String> = store.all().into_iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec!["first on 5th", "second on 5th", "middle", "oldest"]
        );
    }

    #[test]
    fn test_by_date_returns_first_in_storage_order() {
        let mut entries = vec![
            new_entry(day(5), "first", "", "Calm"),
            new_entry(day(5), "second", "", "Calm"),
        ];
        let store = store_with(&mut entries);

        assert_eq!(store.by_date(day(5)).unwrap().title, "first");
        assert!(store.by_date(day(6)).is_none());
    }

    #[test]
    fn test_search_matches_title_content_and_tags_ignoring_case() {
        let mut entries = vec![
            new_entry(day(1), "Beach Day", "sun", "Happy"),
            new_entry(day(2), "Work", "Meeting about the BEACH house", "Stressed"),
            new_entry(day(3), "Quiet", "nothing", "Calm").with_tags(["beachcombing"]),
            new_entry(day(4), "Other", "unrelated", "Bored"),
        ];
        let store = store_with(&mut entries);

        let titles: Vec<String> = store.search("beach").into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Quiet", "Work", "Beach Day"]);
        assert!(store.search("absent").is_empty());
    }

    #[test]
    fn test_search_blank_equals_all() {
        let mut entries = vec![
            new_entry(day(2), "a", "", "Calm"),
            new_entry(day(4), "b", "", "Calm"),
        ];
        let store = store_with(&mut entries);

        assert_eq!(store.search(""), store.all());
        assert_eq!(store.search("   "), store.all());
    }

    #[test]
    fn test_analytics_read_current_snapshot() {
        let mut entries = vec![
            new_entry(day(1), "a", "one two", "Happy").with_tags(["x"]),
            new_entry(day(2), "b", "one two three four", "Sad").with_tags(["x", "y"]),
            new_entry(day(3), "c", "one two three four five six", "Happy"),
        ];
        let store = store_with(&mut entries);

        assert_eq!(store.mood_distribution().positive, 2);
        assert_eq!(store.mood_distribution().negative, 1);
        assert_eq!(store.most_frequent_mood().mood, "Happy");
        assert_eq!(store.most_used_tags(1)[0].tag, "x");
        assert_eq!(store.average_word_count(), 4.0);
        assert_eq!(store.streaks().longest, 3);
        assert_eq!(store.stats(10).total_entries, 3);
    }

    #[test]
    fn test_file_repository_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), Config::default());
        repo.initialize().unwrap();

        let mut entry = new_entry(day(1), "Persisted", "on disk", "Grateful");
        {
            let mut store = EntryStore::open(repo.clone());
            store.add(&mut entry);
        }

        let store = EntryStore::open(repo);
        assert_eq!(store.by_id(entry.id), Some(entry));
    }

    #[test]
    fn test_file_repository_corrupt_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf(), Config::default());
        repo.initialize().unwrap();
        fs::write(repo.entries_path(), "[{\"broken\":").unwrap();

        let mut store = EntryStore::open(repo);
        assert!(store.is_empty());

        let mut entry = new_entry(day(1), "fresh", "", "Calm");
        store.add(&mut entry);
        assert_eq!(entry.id, 1);
    }
}
