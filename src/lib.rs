//! Spellmaster — children's spelling-practice core.
//!
//! The library drives one word at a time through announce → listen →
//! evaluate → advance, accumulating correct and missed words into a session
//! summary. Speech I/O is delegated to pluggable collaborators; persistence
//! is a set of small JSON-backed stores.
//!
//! # Module map
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`phonics`] | Transcript normalization, phonetic letter table, match |
//! | [`session`] | The per-word state machine and session summary |
//! | [`speech`]  | Speech-output / speech-input collaborator contracts |
//! | [`catalog`] | Built-in word lists and the [`catalog::WordList`] type |
//! | [`store`]   | Missed words, custom lists, stats, export/import |
//! | [`config`]  | `settings.toml` and platform paths |
//!
//! The binary in `main.rs` is a thin CLI practice shell over all of this;
//! a GUI shell would drive the same session API.

pub mod catalog;
pub mod config;
pub mod phonics;
pub mod session;
pub mod speech;
pub mod store;
