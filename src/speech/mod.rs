//! Speech collaborator contracts.
//!
//! The session core never talks to a device API directly. It is handed two
//! capabilities:
//!
//! * [`SpeechOutput`] — "speak this word, signal completion or failure".
//! * [`SpeechInput`] — "start listening, deliver transcript hypotheses over
//!   a channel, stop listening".
//!
//! Transcript delivery is an explicit `tokio::sync::mpsc` channel rather
//! than global callback fields, so independent sessions (and tests) cannot
//! interfere with each other.
//!
//! Production stand-ins for the CLI shell live here too: [`ConsoleSpeaker`]
//! prints the announcement, [`LineListener`] turns one typed stdin line into
//! one transcript event.

use thiserror::Error;

pub mod input;
pub mod output;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// All errors that can arise from the speech collaborators.
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    /// The speech-output backend failed to announce a word.
    #[error("Speech output failed: {0}")]
    Output(String),

    /// The speech-input backend could not open a listening stream.
    #[error("Could not start listening: {0}")]
    ListenStart(String),

    /// The speech-input backend failed while closing the stream.
    #[error("Could not stop listening: {0}")]
    ListenStop(String),
}

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use input::{LineListener, SpeechInput};
pub use output::{ConsoleSpeaker, SpeechOutput};

// test-only re-exports so session tests can import the doubles without the
// full module paths.
#[cfg(test)]
pub use input::ScriptedListener;
#[cfg(test)]
pub use output::MockSpeaker;
