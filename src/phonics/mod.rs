//! Transcript normalization and spelling evaluation.
//!
//! Speech recognizers return free-form text; a child spelling aloud produces
//! inconsistent letter-name pronunciations ("bee", "sea", "double-u", "zed").
//! This module turns that text into something comparable against an expected
//! word:
//!
//! * [`normalize`] — canonical lowercase letters-and-spaces form.
//! * [`extract_letters`] — best-effort letter sequence via the
//!   [`PHONETIC_LETTERS`] table.
//! * [`is_spelling_correct`] — three-way exact match (whole word, letters
//!   with pauses, letters run together).
//!
//! Every operation is total: empty or non-alphabetic input yields an empty
//! (or `false`) result, never an error.
//!
//! # Quick start
//!
//! ```rust
//! use spellmaster::phonics::{extract_letters, is_spelling_correct, normalize};
//!
//! assert_eq!(normalize(" C@T!! "), "ct");
//! assert_eq!(extract_letters("bee ay see"), "B A C");
//! assert!(is_spelling_correct("a p p l e", "apple"));
//! assert!(is_spelling_correct("apple", "apple"));
//! ```

pub mod evaluate;
pub mod letters;
pub mod normalize;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use evaluate::is_spelling_correct;
pub use letters::{extract_letters, PHONETIC_LETTERS};
pub use normalize::normalize;
