//! Spelling correctness check.

use super::normalize::normalize;

/// Decide whether a heard transcript spells the expected word.
///
/// After normalizing `heard`, returns `true` when it matches any of three
/// canonical forms of `expected`:
///
/// 1. the whole word, lowercased ("apple");
/// 2. the word's letters joined by single spaces ("a p p l e");
/// 3. the word's letters run together once internal spaces are removed
///    ("ap ple" → "apple").
///
/// No partial credit and no edit-distance tolerance — a wrong spelling is a
/// normal `false`, never an error.
///
/// ```rust
/// use spellmaster::phonics::is_spelling_correct;
///
/// assert!(is_spelling_correct("apple", "apple"));
/// assert!(is_spelling_correct("a p p l e", "apple"));
/// assert!(is_spelling_correct("ap ple", "apple"));
/// assert!(!is_spelling_correct("x y z", "cat"));
/// ```
pub fn is_spelling_correct(heard: &str, expected: &str) -> bool {
    let heard = normalize(heard);
    let expected = expected.to_lowercase();

    // Whole word spoken correctly.
    if heard == expected {
        return true;
    }

    // Spelled out with pauses: "c a t".
    let spelled_out = expected
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    if heard == spelled_out {
        return true;
    }

    // Spelled out run together, possibly with stray pauses: "ca t" → "cat".
    heard.replace(' ', "") == expected
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
