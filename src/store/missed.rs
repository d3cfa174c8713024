//! Missed-word accumulation across sessions.

use std::path::PathBuf;

use crate::config::AppPaths;

/// Words evaluated incorrectly in past sessions, queued for review.
///
/// Deduplicated, insertion-ordered. The session core only appends to this
/// store at completion (via the caller); practising the missed list itself
/// reads it like any other list. Persisted to JSON after every mutation.
pub struct MissedWordStore {
    words: Vec<String>,
    path: PathBuf,
}

impl MissedWordStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Load from the platform config directory, or start empty when the
    /// file does not exist yet.
    pub fn load_or_default() -> Self {
        Self::load_from(AppPaths::new().missed_words_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: PathBuf) -> Self {
        let words = if path.exists() {
            let data = std::fs::read_to_string(&path).unwrap_or_default();
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            Vec::new()
        };
        Self { words, path }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append the missed words of a finished session, skipping words already
    /// present, then persist.
    pub fn add_missed<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !self.words.contains(&word) {
                self.words.push(word);
            }
        }
        self.save();
    }

    /// Remove every accumulated word, then persist.
    pub fn clear(&mut self) {
        self.words.clear();
        self.save();
    }

    /// Replace the whole accumulation (import path), then persist.
    pub(crate) fn replace(&mut self, words: Vec<String>) {
        self.words = words;
        self.save();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The accumulated words, oldest first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.words) {
            Ok(data) => {
                if let Err(e) = std::fs::write(&self.path, data) {
                    log::error!("store: failed to write missed words: {e}");
                }
            }
            Err(e) => log::error!("store: failed to serialize missed words: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
