//! Session phases and outcome types.

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Phases of a spelling session, per word.
///
/// ```text
/// AwaitingAnnouncement ──start_listening──▶ Listening
/// Listening ──stop_and_evaluate (transcript)──▶ Evaluated
/// Listening ──stop_and_evaluate (empty)─────▶ AwaitingAnnouncement (retry)
/// Evaluated ──advance──▶ AwaitingAnnouncement │ Complete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current word is (about to be) announced; ready to listen.
    AwaitingAnnouncement,

    /// A transcript stream is open; events replace the pending transcript.
    Listening,

    /// The current word has been recorded as correct or missed.
    Evaluated,

    /// Every word has been evaluated; the summary has been produced.
    Complete,
}

impl SessionPhase {
    /// Returns `true` while a transcript stream is open.
    pub fn is_listening(&self) -> bool {
        matches!(self, SessionPhase::Listening)
    }

    /// A short human-readable label suitable for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::AwaitingAnnouncement => "Ready",
            SessionPhase::Listening => "Listening",
            SessionPhase::Evaluated => "Evaluated",
            SessionPhase::Complete => "Complete",
        }
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::AwaitingAnnouncement
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Outcome of evaluating one spelling attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The word that was being spelled.
    pub word: String,
    /// The raw transcript the attempt was judged on.
    pub heard: String,
    /// Whether the attempt matched.
    pub correct: bool,
}

// ---------------------------------------------------------------------------
// SessionSummary
// ---------------------------------------------------------------------------

/// The sole durable output of a completed session.
///
/// The caller hands `missed_words` to the missed-word store and the counts
/// to the stats store; the session itself persists nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of words in the practised list.
    pub total_words: usize,
    /// How many were spelled correctly.
    pub correct_count: usize,
    /// The words that were missed, in practice order.
    pub missed_words: Vec<String>,
    /// Label of the practised list.
    pub list_name: String,
}

impl SessionSummary {
    /// Accuracy as a percentage (0–100). A zero-word session is 0 %.
    pub fn accuracy_percent(&self) -> f32 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.correct_count as f32 * 100.0 / self.total_words as f32
    }
}

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

/// Result of asking the session for the next word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A new current word is ready to be announced.
    Next,
    /// No words remain; the session is finished.
    Complete(SessionSummary),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
