//! User-created custom word lists.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::WordList;
use crate::config::AppPaths;

// ---------------------------------------------------------------------------
// CustomWordList
// ---------------------------------------------------------------------------

/// One user-created list with usage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomWordList {
    /// Unique list name (upsert key).
    pub name: String,
    /// Lowercased, trimmed words in practice order.
    pub words: Vec<String>,
    /// When the list was first created. Preserved across updates.
    pub created_at: DateTime<Utc>,
    /// When the list was last practised or edited.
    pub last_used: Option<DateTime<Utc>>,
    /// How many practice sessions have used this list.
    pub times_used: u32,
}

impl CustomWordList {
    /// Materialize as an immutable [`WordList`] for a session.
    pub fn to_word_list(&self) -> WordList {
        WordList::new(self.name.as_str(), &self.words)
    }
}

// ---------------------------------------------------------------------------
// CustomListStore
// ---------------------------------------------------------------------------

/// Manages user-created word lists, persisted to JSON after every mutation.
///
/// Lists are kept sorted most recently used first (falling back to creation
/// time), matching menu display order.
pub struct CustomListStore {
    lists: Vec<CustomWordList>,
    path: PathBuf,
}

impl CustomListStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Load from the platform config directory, or start empty when the
    /// file does not exist yet.
    pub fn load_or_default() -> Self {
        Self::load_from(AppPaths::new().custom_lists_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: PathBuf) -> Self {
        let lists = if path.exists() {
            let data = std::fs::read_to_string(&path).unwrap_or_default();
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            Vec::new()
        };
        Self { lists, path }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Create or update a list by name, then persist.
    ///
    /// Words are lowercased and trimmed; empty entries are dropped. On
    /// update, `created_at` and `times_used` are preserved and `last_used`
    /// is bumped.
    pub fn save_list<I, S>(&mut self, name: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let now = Utc::now();

        if let Some(existing) = self.lists.iter_mut().find(|l| l.name == name) {
            existing.words = words;
            existing.last_used = Some(now);
        } else {
            self.lists.push(CustomWordList {
                name: name.to_string(),
                words,
                created_at: now,
                last_used: Some(now),
                times_used: 0,
            });
        }

        self.sort_and_save();
    }

    /// Delete a list by name, then persist. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.name != name);
        let removed = self.lists.len() != before;
        if removed {
            self.save();
        }
        removed
    }

    /// Record that a list was practised: bump `last_used` and `times_used`,
    /// then persist. Unknown names are ignored.
    pub fn record_usage(&mut self, name: &str) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.name == name) {
            list.last_used = Some(Utc::now());
            list.times_used += 1;
            self.sort_and_save();
        }
    }

    /// Replace every list (import path), then persist.
    pub(crate) fn replace(&mut self, lists: Vec<CustomWordList>) {
        self.lists = lists;
        self.sort_and_save();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Look up a list by name.
    pub fn get(&self, name: &str) -> Option<&CustomWordList> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// All lists, most recently used first.
    pub fn all(&self) -> &[CustomWordList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn sort_and_save(&mut self) {
        self.lists
            .sort_by_key(|l| std::cmp::Reverse(l.last_used.unwrap_or(l.created_at)));
        self.save();
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.lists) {
            Ok(data) => {
                if let Err(e) = std::fs::write(&self.path, data) {
                    log::error!("store: failed to write custom lists: {e}");
                }
            }
            Err(e) => log::error!("store: failed to serialize custom lists: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in_temp() -> (CustomListStore, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("custom-lists.json");
        (CustomListStore::load_from(path), dir)
    }

    #[test]
    fn starts_empty() {
        let (store, _dir) = store_in_temp();
        assert!(store.is_empty());
    }

    #[test]
    fn save_list_lowercases_and_drops_empty_words() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("Spelling Bee", ["  Apple ", "BANANA", " "]);

        let list = store.get("Spelling Bee").unwrap();
        assert_eq!(list.words, vec!["apple", "banana"]);
        assert_eq!(list.times_used, 0);
    }

    #[test]
    fn upsert_preserves_created_at_and_times_used() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("My List", ["apple"]);
        store.record_usage("My List");
        let created_at = store.get("My List").unwrap().created_at;

        store.save_list("My List", ["apple", "banana"]);

        let list = store.get("My List").unwrap();
        assert_eq!(list.words, vec!["apple", "banana"]);
        assert_eq!(list.created_at, created_at);
        assert_eq!(list.times_used, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn record_usage_bumps_counters() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("My List", ["apple"]);
        store.record_usage("My List");
        store.record_usage("My List");
        assert_eq!(store.get("My List").unwrap().times_used, 2);
    }

    #[test]
    fn record_usage_for_unknown_list_is_ignored() {
        let (mut store, _dir) = store_in_temp();
        store.record_usage("nope");
        assert!(store.is_empty());
    }

    #[test]
    fn delete_removes_by_name() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("A", ["apple"]);
        store.save_list("B", ["banana"]);

        assert!(store.delete("A"));
        assert!(!store.delete("A"));
        assert!(store.get("A").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn most_recently_used_sorts_first() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("old", ["apple"]);
        store.save_list("new", ["banana"]);
        store.record_usage("old");

        assert_eq!(store.all()[0].name, "old");
        assert_eq!(store.all()[1].name, "new");
    }

    #[test]
    fn persists_and_reloads() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("custom-lists.json");

        {
            let mut store = CustomListStore::load_from(path.clone());
            store.save_list("My List", ["apple", "banana"]);
            store.record_usage("My List");
        }

        let reloaded = CustomListStore::load_from(path);
        let list = reloaded.get("My List").unwrap();
        assert_eq!(list.words, vec!["apple", "banana"]);
        assert_eq!(list.times_used, 1);
    }

    #[test]
    fn to_word_list_round_trips_name_and_words() {
        let (mut store, _dir) = store_in_temp();
        store.save_list("My List", ["apple", "banana"]);

        let word_list = store.get("My List").unwrap().to_word_list();
        assert_eq!(word_list.name(), "My List");
        assert_eq!(word_list.words(), &["apple", "banana"]);
    }
}
