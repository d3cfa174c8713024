//! Speech-output collaborator: announce a word aloud.

use async_trait::async_trait;

use super::SpeechError;

// ---------------------------------------------------------------------------
// SpeechOutput trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speaking a word to the user.
///
/// Implementations must be `Send + Sync` so they can be held behind an
/// `Arc<dyn SpeechOutput>` and shared with the session.
///
/// # Contract
///
/// `speak` must eventually resolve — either `Ok(())` once the announcement
/// has finished, or an error. The session treats a failed announcement as
/// non-fatal (logged, practice continues).
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    /// Announce `word` and resolve when the announcement has completed.
    async fn speak(&self, word: &str) -> Result<(), SpeechError>;
}

// Compile-time assertion: Box<dyn SpeechOutput> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechOutput>) {}
};

// ---------------------------------------------------------------------------
// ConsoleSpeaker
// ---------------------------------------------------------------------------

/// CLI stand-in for a text-to-speech backend.
///
/// Prints the announcement to stdout in the same phrasing a TTS voice would
/// use. The configured speech rate is carried along for a real backend; the
/// console only logs it.
#[derive(Debug, Clone)]
pub struct ConsoleSpeaker {
    rate: f32,
}

impl ConsoleSpeaker {
    /// Create a speaker with the given speech rate (1.0 = normal speed).
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }
}

impl Default for ConsoleSpeaker {
    fn default() -> Self {
        Self::new(0.8)
    }
}

#[async_trait]
impl SpeechOutput for ConsoleSpeaker {
    async fn speak(&self, word: &str) -> Result<(), SpeechError> {
        log::debug!("speech: announcing {word:?} at rate {}", self.rate);
        println!("🔊 Your word is: {word}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockSpeaker  (test-only)
// ---------------------------------------------------------------------------

/// Test double that records every spoken word and can be configured to fail.
#[cfg(test)]
pub struct MockSpeaker {
    spoken: std::sync::Mutex<Vec<String>>,
    fail: bool,
}

#[cfg(test)]
impl MockSpeaker {
    /// Create a mock whose `speak` always succeeds.
    pub fn ok() -> Self {
        Self {
            spoken: std::sync::Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a mock whose `speak` always fails.
    pub fn failing() -> Self {
        Self {
            spoken: std::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Words passed to `speak` so far, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechOutput for MockSpeaker {
    async fn speak(&self, word: &str) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(word.to_string());
        if self.fail {
            return Err(SpeechError::Output("mock failure".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
