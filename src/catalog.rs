//! Built-in word-list catalog and the [`WordList`] type.
//!
//! The catalog is a read-only registry: four weekly lists of five words each
//! plus a combined practice-all list. Custom and missed-word lists come from
//! the [`crate::store`] module; all of them are handed to a session as a
//! [`WordList`], which is immutable for the session's lifetime.

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// A named, ordered sequence of lowercase practice words.
///
/// Words are lowercased and trimmed on construction; empty entries are
/// dropped. Emptiness is allowed here — the session constructor rejects it,
/// so list-editing code can still pass partial lists around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    words: Vec<String>,
}

impl WordList {
    /// Build a list from any iterable of words.
    pub fn new<S, I, W>(name: S, words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            name: name.into(),
            words,
        }
    }

    /// Display label for the list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The words, in practice order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Built-in lists
// ---------------------------------------------------------------------------

/// Static metadata for one built-in list.
#[derive(Debug)]
pub struct BuiltinList {
    /// Identifier used on the command line and in the last-selected setting.
    pub id: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// The words, already lowercase.
    pub words: &'static [&'static str],
}

const WEEK1: &[&str] = &["apple", "banana", "cherry", "grape", "orange"];
const WEEK2: &[&str] = &["dolphin", "elephant", "flamingo", "giraffe", "hippo"];
const WEEK3: &[&str] = &["grapefruit", "hazelnut", "iguana", "jackfruit", "kangaroo"];
const WEEK4: &[&str] = &["jellyfish", "kiwi", "lemonade", "mango", "nectarine"];
const ALL: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "grape",
    "orange",
    "dolphin",
    "elephant",
    "flamingo",
    "giraffe",
    "hippo",
    "grapefruit",
    "hazelnut",
    "iguana",
    "jackfruit",
    "kangaroo",
    "jellyfish",
    "kiwi",
    "lemonade",
    "mango",
    "nectarine",
];

/// The built-in catalog, in menu display order.
pub const BUILTIN_LISTS: &[BuiltinList] = &[
    BuiltinList {
        id: "week1",
        label: "Week 1",
        words: WEEK1,
    },
    BuiltinList {
        id: "week2",
        label: "Week 2",
        words: WEEK2,
    },
    BuiltinList {
        id: "week3",
        label: "Week 3",
        words: WEEK3,
    },
    BuiltinList {
        id: "week4",
        label: "Week 4",
        words: WEEK4,
    },
    BuiltinList {
        id: "all",
        label: "Practice All",
        words: ALL,
    },
];

/// Look up a built-in list by id and materialize it as a [`WordList`].
pub fn find_builtin(id: &str) -> Option<WordList> {
    BUILTIN_LISTS
        .iter()
        .find(|list| list.id == id)
        .map(|list| WordList::new(list.label, list.words))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_lowercases_and_trims() {
        let list = WordList::new("Test", ["  Apple ", "BANANA", ""]);
        assert_eq!(list.words(), &["apple", "banana"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn weekly_lists_have_five_words_each() {
        for id in ["week1", "week2", "week3", "week4"] {
            let list = find_builtin(id).unwrap();
            assert_eq!(list.len(), 5, "{id} has wrong length");
        }
    }

    #[test]
    fn practice_all_combines_the_weeks_in_order() {
        let all = find_builtin("all").unwrap();
        assert_eq!(all.len(), 20);

        let combined: Vec<String> = ["week1", "week2", "week3", "week4"]
            .iter()
            .flat_map(|id| find_builtin(id).unwrap().words().to_vec())
            .collect();
        assert_eq!(all.words(), combined.as_slice());
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(find_builtin("week9").is_none());
        assert!(find_builtin("").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in BUILTIN_LISTS.iter().enumerate() {
            for b in &BUILTIN_LISTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn builtin_words_are_lowercase() {
        for list in BUILTIN_LISTS {
            for word in list.words {
                assert_eq!(*word, word.to_lowercase(), "in {}", list.id);
            }
        }
    }
}
