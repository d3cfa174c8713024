//! Canonical text form for spoken-spelling transcripts.

/// Normalize a raw transcript to lowercase letters and single spaces.
///
/// Lower-cases the input, strips every character that is not an ASCII
/// lowercase letter or whitespace, collapses whitespace runs to single
/// spaces, and trims the ends. Deterministic, total, and idempotent.
///
/// ```rust
/// use spellmaster::phonics::normalize;
///
/// assert_eq!(normalize("Cat 123!"), "cat");
/// assert_eq!(normalize("  a   p p  "), "a p p");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    // split_whitespace collapses runs and drops leading/trailing whitespace.
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize(" C@T!! "), "ct");
        assert_eq!(normalize("Cat 123!"), "cat");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a \t p\n p   l e"), "a p p l e");
    }

    #[test]
    fn trims_leading_and_trailing_whitespace() {
        assert_eq!(normalize("   apple   "), "apple");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn idempotent() {
        for s in [" C@T!! ", "Hello,   World 42", "", "a p p l e", "ßver"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn non_ascii_letters_are_stripped() {
        // Only a–z survive; accented and non-Latin letters are dropped.
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("สวัสดี cat"), "cat");
    }
}
