//! Phonetic letter-name table and best-effort letter extraction.
//!
//! Children spelling aloud rarely produce clean single-letter tokens — a
//! recognizer hears "bee", "sea", "are", "zed". [`PHONETIC_LETTERS`] maps
//! known spoken variants to canonical letters; [`extract_letters`] applies it
//! token by token.
//!
//! The table is an **ordered** list and its order is part of the contract:
//! the prefix-match fallback emits the first matching entry in table order.
//! A token that prefix-matches several keys resolves to whichever comes
//! first — a documented heuristic limitation, not a bug.

// ---------------------------------------------------------------------------
// PHONETIC_LETTERS
// ---------------------------------------------------------------------------

/// Ordered `(spoken token, canonical letter)` pairs, A–Z.
///
/// Keys are lowercase with punctuation already stripped. Many-to-one:
/// several spoken variants map to the same letter. Matching policy (applied
/// per token by [`extract_letters`]):
///
/// 1. exact key match;
/// 2. single alphabetic character → its own uppercase;
/// 3. prefix match in table order (token prefixes key, or key prefixes
///    token) → first hit wins;
/// 4. no match → the token contributes no letter.
pub const PHONETIC_LETTERS: &[(&str, char)] = &[
    ("ay", 'A'),
    ("aye", 'A'),
    ("eh", 'A'),
    ("bee", 'B'),
    ("be", 'B'),
    ("see", 'C'),
    ("sea", 'C'),
    ("si", 'C'),
    ("dee", 'D'),
    ("ee", 'E'),
    ("ef", 'F'),
    ("eff", 'F'),
    ("gee", 'G'),
    ("jee", 'G'),
    ("aitch", 'H'),
    ("haitch", 'H'),
    ("eye", 'I'),
    ("jay", 'J'),
    ("kay", 'K'),
    ("el", 'L'),
    ("ell", 'L'),
    ("elle", 'L'),
    ("em", 'M'),
    ("en", 'N'),
    ("oh", 'O'),
    ("owe", 'O'),
    ("pee", 'P'),
    ("pea", 'P'),
    ("cue", 'Q'),
    ("queue", 'Q'),
    ("kew", 'Q'),
    ("ar", 'R'),
    ("are", 'R'),
    ("arr", 'R'),
    ("es", 'S'),
    ("ess", 'S'),
    ("tee", 'T'),
    ("tea", 'T'),
    ("you", 'U'),
    ("yew", 'U'),
    ("ewe", 'U'),
    ("vee", 'V'),
    ("doubleyou", 'W'),
    ("doubleu", 'W'),
    ("dubya", 'W'),
    ("ex", 'X'),
    ("ecks", 'X'),
    ("why", 'Y'),
    ("wye", 'Y'),
    ("zee", 'Z'),
    ("zed", 'Z'),
];

// ---------------------------------------------------------------------------
// extract_letters
// ---------------------------------------------------------------------------

/// Extract a best-effort letter sequence from a raw transcript.
///
/// Lower-cases the input, splits on whitespace, strips non-alphabetic
/// characters from each token, then resolves each token through the
/// [`PHONETIC_LETTERS`] matching policy. Resolved letters are joined with
/// single spaces; unmatched tokens are silently dropped.
///
/// Inherently lossy: two spoken tokens may collapse to the same letter, and
/// a token the table does not know simply disappears. Never errors.
///
/// ```rust
/// use spellmaster::phonics::extract_letters;
///
/// assert_eq!(extract_letters("bee ay see"), "B A C");
/// assert_eq!(extract_letters("c a t"), "C A T");
/// assert_eq!(extract_letters("blorp"), "");
/// ```
pub fn extract_letters(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut letters: Vec<char> = Vec::new();

    for raw in lowered.split_whitespace() {
        let token: String = raw.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        if token.is_empty() {
            continue;
        }
        if let Some(letter) = resolve_token(&token) {
            letters.push(letter);
        }
    }

    let mut out = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*letter);
    }
    out
}

/// Resolve one cleaned token to a canonical letter, or `None`.
fn resolve_token(token: &str) -> Option<char> {
    // (i) exact table match
    if let Some(&(_, letter)) = PHONETIC_LETTERS.iter().find(|(key, _)| *key == token) {
        return Some(letter);
    }

    // (ii) a lone alphabetic character is its own letter
    if token.len() == 1 {
        return token.chars().next().map(|c| c.to_ascii_uppercase());
    }

    // (iii) prefix fallback, first match in table order
    PHONETIC_LETTERS
        .iter()
        .find(|(key, _)| token.starts_with(key) || key.starts_with(token))
        .map(|&(_, letter)| letter)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_table_matches() {
        assert_eq!(extract_letters("bee ay see"), "B A C");
        assert_eq!(extract_letters("zed ee dee"), "Z E D");
    }

    #[test]
    fn single_characters_pass_through_uppercased() {
        assert_eq!(extract_letters("c a t"), "C A T");
        assert_eq!(extract_letters("X y Z"), "X Y Z");
    }

    #[test]
    fn punctuation_is_stripped_per_token() {
        assert_eq!(extract_letters("bee, ay. see!"), "B A C");
        assert_eq!(extract_letters("b. a? t..."), "B A T");
    }

    #[test]
    fn prefix_fallback_token_prefixes_key() {
        // "dou" is a prefix of "doubleyou".
        assert_eq!(extract_letters("dou"), "W");
        // "se" is a prefix of "see" (first C entry in table order).
        assert_eq!(extract_letters("se"), "C");
    }

    #[test]
    fn prefix_fallback_key_prefixes_token() {
        // "bees" starts with the key "bee".
        assert_eq!(extract_letters("bees"), "B");
        // "zeddy" starts with "zed".
        assert_eq!(extract_letters("zeddy"), "Z");
    }

    #[test]
    fn unmatched_tokens_are_dropped() {
        assert_eq!(extract_letters("blorp qwxz"), "");
        assert_eq!(extract_letters("bee blorp see"), "B C");
    }

    #[test]
    fn empty_and_non_alphabetic_input() {
        assert_eq!(extract_letters(""), "");
        assert_eq!(extract_letters("   "), "");
        assert_eq!(extract_letters("123 !!"), "");
    }

    #[test]
    fn table_letters_are_all_uppercase_ascii() {
        for &(key, letter) in PHONETIC_LETTERS {
            assert!(letter.is_ascii_uppercase(), "bad letter for key {key:?}");
            assert!(!key.is_empty());
            assert!(key.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn table_covers_every_letter() {
        for letter in 'A'..='Z' {
            // Letters that only have the single-char rule (none — the table
            // carries at least one spoken variant per letter).
            assert!(
                PHONETIC_LETTERS.iter().any(|&(_, l)| l == letter),
                "no spoken variant for {letter}"
            );
        }
    }
}
