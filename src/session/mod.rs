//! Spelling practice session: one pass through a word list.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    SpellingSession                         │
//! │                                                            │
//! │  announce ──▶ AwaitingAnnouncement                         │
//! │                  │ start_listening                         │
//! │                  ▼                                         │
//! │              Listening ◀── transcript events (mpsc)        │
//! │                  │ stop_and_evaluate                       │
//! │                  ├─ empty ──▶ NoSpeechDetected (retry)     │
//! │                  ▼                                         │
//! │              Evaluated ── advance ──▶ next word            │
//! │                  │                                         │
//! │                  └── no words left ──▶ Complete(summary)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is exclusively owned by its driver (`&mut self` operations,
//! invoked strictly sequentially). I/O goes through the
//! [`crate::speech`] collaborators; at most one announce or listen is
//! outstanding at a time, and starting a new one supersedes the old.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use spellmaster::catalog;
//! use spellmaster::config::EvaluationMode;
//! use spellmaster::session::{Advance, SpellingSession};
//! use spellmaster::speech::{ConsoleSpeaker, LineListener};
//!
//! #[tokio::main]
//! async fn main() {
//!     let list = catalog::find_builtin("week1").unwrap();
//!     let mut session = SpellingSession::new(
//!         list,
//!         Arc::new(ConsoleSpeaker::default()),
//!         Arc::new(LineListener::new()),
//!         EvaluationMode::Word,
//!     )
//!     .unwrap();
//!
//!     loop {
//!         session.announce().await;
//!         session.start_listening().await.unwrap();
//!         let _ = session.await_transcript().await;
//!         let _ = session.stop_and_evaluate().await;
//!         match session.advance().unwrap() {
//!             Advance::Next => continue,
//!             Advance::Complete(summary) => {
//!                 println!("{}/{} correct", summary.correct_count, summary.total_words);
//!                 break;
//!             }
//!         }
//!     }
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{SessionError, SpellingSession};
pub use state::{Advance, Evaluation, SessionPhase, SessionSummary};
