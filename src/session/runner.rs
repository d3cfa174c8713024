//! The spelling session driver: announce → listen → evaluate → advance.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::catalog::WordList;
use crate::config::EvaluationMode;
use crate::phonics::{extract_letters, is_spelling_correct};
use crate::speech::{SpeechError, SpeechInput, SpeechOutput};

use super::state::{Advance, Evaluation, SessionPhase, SessionSummary};

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// All errors a session operation can surface.
///
/// Every variant is recoverable by retrying the same word; nothing here is
/// fatal. A wrong spelling is a normal `false` evaluation, never an error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Sessions require at least one word.
    #[error("Cannot start a session with an empty word list")]
    EmptyWordList,

    /// Stop-listening was requested with an empty transcript. The word has
    /// not been evaluated; the caller may listen again.
    #[error("No speech detected — try the same word again")]
    NoSpeechDetected,

    /// The speech-input collaborator failed to open a stream. The Listening
    /// phase was not entered.
    #[error("Listening failed to start: {0}")]
    ListenStart(#[source] SpeechError),

    /// The current word already has an outcome; advance before listening
    /// again.
    #[error("Current word has already been evaluated")]
    AlreadyEvaluated,

    /// Advance was requested before the current word was evaluated.
    #[error("Current word has not been evaluated yet")]
    NotEvaluated,

    /// Every word has been evaluated and the summary was produced.
    #[error("Session is already complete")]
    Complete,
}

// ---------------------------------------------------------------------------
// SpellingSession
// ---------------------------------------------------------------------------

/// One pass through a word list, owned exclusively by its driver.
///
/// The session mutates only through the operations below, invoked strictly
/// sequentially. It persists nothing — the [`SessionSummary`] returned by
/// the final [`advance`](Self::advance) is the sole durable output.
pub struct SpellingSession {
    words: Vec<String>,
    list_name: String,
    mode: EvaluationMode,
    speaker: Arc<dyn SpeechOutput>,
    listener: Arc<dyn SpeechInput>,

    index: usize,
    phase: SessionPhase,
    correct_words: Vec<String>,
    missed_words: Vec<String>,
    pending_transcript: String,
    transcript_rx: Option<mpsc::Receiver<String>>,
}

impl SpellingSession {
    /// Create a session over `list`.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyWordList`] when `list` has no words.
    pub fn new(
        list: WordList,
        speaker: Arc<dyn SpeechOutput>,
        listener: Arc<dyn SpeechInput>,
        mode: EvaluationMode,
    ) -> Result<Self, SessionError> {
        if list.is_empty() {
            return Err(SessionError::EmptyWordList);
        }
        Ok(Self {
            list_name: list.name().to_string(),
            words: list.words().to_vec(),
            mode,
            speaker,
            listener,
            index: 0,
            phase: SessionPhase::AwaitingAnnouncement,
            correct_words: Vec::new(),
            missed_words: Vec::new(),
            pending_transcript: String::new(),
            transcript_rx: None,
        })
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Announce the current word through the speech-output collaborator.
    ///
    /// Announcement failure is non-fatal: it is logged and the session
    /// proceeds as if it succeeded, so the caller can still listen. Called
    /// while Listening, this cancels the in-flight listen and discards the
    /// pending transcript first. Ignored once the word is evaluated.
    pub async fn announce(&mut self) {
        match self.phase {
            SessionPhase::Evaluated | SessionPhase::Complete => {
                log::debug!("session: announce ignored in {:?}", self.phase);
                return;
            }
            SessionPhase::Listening => self.abandon_listen().await,
            SessionPhase::AwaitingAnnouncement => {}
        }

        self.pending_transcript.clear();
        let word = self.words[self.index].clone();
        if let Err(e) = self.speaker.speak(&word).await {
            log::warn!("session: announcement failed for {word:?}: {e}");
        }
    }

    /// Re-announce the current word (the "hear it again" button).
    pub async fn repeat_word(&mut self) {
        self.announce().await;
    }

    /// Open a transcript stream for the current word.
    ///
    /// Starting while already listening supersedes the previous stream.
    ///
    /// # Errors
    ///
    /// - [`SessionError::ListenStart`] — the collaborator failed; the
    ///   Listening phase was not entered and the word index is unchanged.
    /// - [`SessionError::AlreadyEvaluated`] / [`SessionError::Complete`] —
    ///   nothing left to listen for.
    pub async fn start_listening(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Complete => return Err(SessionError::Complete),
            SessionPhase::Evaluated => return Err(SessionError::AlreadyEvaluated),
            SessionPhase::Listening => self.abandon_listen().await,
            SessionPhase::AwaitingAnnouncement => {}
        }

        self.pending_transcript.clear();
        let rx = self
            .listener
            .start_listening()
            .await
            .map_err(SessionError::ListenStart)?;
        self.transcript_rx = Some(rx);
        self.phase = SessionPhase::Listening;
        Ok(())
    }

    /// Wait for the next transcript hypothesis and make it the pending one.
    ///
    /// Returns the new hypothesis, or `None` when the session is not
    /// listening or the stream has ended. Each event carries the latest
    /// whole-utterance hypothesis, so the previous value is replaced, not
    /// appended to.
    pub async fn await_transcript(&mut self) -> Option<String> {
        let rx = self.transcript_rx.as_mut()?;
        let text = rx.recv().await?;
        self.pending_transcript = text.clone();
        Some(text)
    }

    /// Close the transcript stream and judge the pending transcript.
    ///
    /// Outside the Listening phase this is a no-op returning `Ok(None)`.
    /// Any hypotheses already delivered but not yet observed are drained
    /// first; events arriving after the stop are never seen because the
    /// receiver is dropped.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoSpeechDetected`] — the transcript was empty or
    /// whitespace-only. The word is not evaluated and `current_index` is
    /// unchanged; the caller may start listening again.
    pub async fn stop_and_evaluate(&mut self) -> Result<Option<Evaluation>, SessionError> {
        if self.phase != SessionPhase::Listening {
            return Ok(None);
        }

        if let Err(e) = self.listener.stop_listening().await {
            log::warn!("session: stop_listening failed: {e}");
        }
        self.drain_delivered();
        self.transcript_rx = None;

        if self.pending_transcript.trim().is_empty() {
            self.phase = SessionPhase::AwaitingAnnouncement;
            return Err(SessionError::NoSpeechDetected);
        }

        let word = self.words[self.index].clone();
        let correct = match self.mode {
            EvaluationMode::Word => is_spelling_correct(&self.pending_transcript, &word),
            EvaluationMode::Letters => {
                let letters = extract_letters(&self.pending_transcript);
                is_spelling_correct(&letters, &word)
            }
        };

        if correct {
            self.correct_words.push(word.clone());
        } else {
            self.missed_words.push(word.clone());
        }
        self.phase = SessionPhase::Evaluated;

        log::debug!(
            "session: word {}/{} {:?} heard {:?} → {}",
            self.index + 1,
            self.words.len(),
            word,
            self.pending_transcript,
            if correct { "correct" } else { "missed" }
        );

        Ok(Some(Evaluation {
            word,
            heard: self.pending_transcript.clone(),
            correct,
        }))
    }

    /// Move to the next word, or complete the session.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotEvaluated`] before the current word has an
    /// outcome; [`SessionError::Complete`] once the summary was produced.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        match self.phase {
            SessionPhase::Evaluated => {}
            SessionPhase::Complete => return Err(SessionError::Complete),
            _ => return Err(SessionError::NotEvaluated),
        }

        self.index += 1;
        self.pending_transcript.clear();

        if self.index < self.words.len() {
            self.phase = SessionPhase::AwaitingAnnouncement;
            Ok(Advance::Next)
        } else {
            self.phase = SessionPhase::Complete;
            Ok(Advance::Complete(SessionSummary {
                total_words: self.words.len(),
                correct_count: self.correct_words.len(),
                missed_words: self.missed_words.clone(),
                list_name: self.list_name.clone(),
            }))
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The word currently being practised, or `None` once complete.
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// Zero-based index of the current word. Strictly increasing.
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The most recent transcript hypothesis for the current word.
    pub fn pending_transcript(&self) -> &str {
        &self.pending_transcript
    }

    pub fn correct_words(&self) -> &[String] {
        &self.correct_words
    }

    pub fn missed_words(&self) -> &[String] {
        &self.missed_words
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Cancel an in-flight listen: stop the collaborator, drop the stream,
    /// discard the pending transcript.
    async fn abandon_listen(&mut self) {
        if let Err(e) = self.listener.stop_listening().await {
            log::warn!("session: stop_listening failed: {e}");
        }
        self.transcript_rx = None;
        self.pending_transcript.clear();
        self.phase = SessionPhase::AwaitingAnnouncement;
    }

    /// Pull every already-delivered hypothesis out of the stream, keeping
    /// only the latest.
    fn drain_delivered(&mut self) {
        if let Some(rx) = self.transcript_rx.as_mut() {
            while let Ok(text) = rx.try_recv() {
                self.pending_transcript = text;
            }
        }
    }
}

impl std::fmt::Debug for SpellingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellingSession")
            .field("list_name", &self.list_name)
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("correct", &self.correct_words.len())
            .field("missed", &self.missed_words.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordList;
    use crate::speech::{MockSpeaker, ScriptedListener};

    fn session_with(
        words: &[&str],
        listener: ScriptedListener,
        mode: EvaluationMode,
    ) -> (SpellingSession, Arc<MockSpeaker>) {
        let speaker = Arc::new(MockSpeaker::ok());
        let session = SpellingSession::new(
            WordList::new("Week1", words),
            Arc::clone(&speaker) as Arc<dyn SpeechOutput>,
            Arc::new(listener),
            mode,
        )
        .expect("non-empty list");
        (session, speaker)
    }

    /// Drive one word through listen → evaluate, returning the evaluation.
    async fn attempt(session: &mut SpellingSession) -> Evaluation {
        session.start_listening().await.expect("listen");
        while session.await_transcript().await.is_some() {}
        session
            .stop_and_evaluate()
            .await
            .expect("evaluate")
            .expect("was listening")
    }

    // ---- construction ---

    #[test]
    fn empty_word_list_is_rejected() {
        let result = SpellingSession::new(
            WordList::new("Empty", Vec::<String>::new()),
            Arc::new(crate::speech::ConsoleSpeaker::default()),
            Arc::new(crate::speech::LineListener::new()),
            EvaluationMode::Word,
        );
        assert!(matches!(result, Err(SessionError::EmptyWordList)));
    }

    // ---- announce ---

    #[tokio::test]
    async fn announce_speaks_the_current_word() {
        let (mut session, speaker) =
            session_with(&["apple"], ScriptedListener::silent(), EvaluationMode::Word);
        session.announce().await;
        assert_eq!(speaker.spoken(), vec!["apple"]);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnnouncement);
    }

    #[tokio::test]
    async fn announcement_failure_is_non_fatal() {
        let speaker = Arc::new(MockSpeaker::failing());
        let mut session = SpellingSession::new(
            WordList::new("Week1", ["apple"]),
            Arc::clone(&speaker) as Arc<dyn SpeechOutput>,
            Arc::new(ScriptedListener::with_transcripts(["a p p l e"])),
            EvaluationMode::Word,
        )
        .unwrap();

        session.announce().await;
        // The session proceeds as if the announcement succeeded.
        let eval = attempt(&mut session).await;
        assert!(eval.correct);
    }

    // ---- the two spec scenarios ---

    #[tokio::test]
    async fn two_word_session_produces_expected_summary() {
        let listener = ScriptedListener::with_scripts(vec![
            vec!["a p p l e".to_string()],
            vec!["xyz".to_string()],
        ]);
        let (mut session, _) =
            session_with(&["apple", "banana"], listener, EvaluationMode::Word);

        session.announce().await;
        let eval = attempt(&mut session).await;
        assert!(eval.correct);
        assert_eq!(session.correct_words(), &["apple"]);
        assert_eq!(session.advance().unwrap(), Advance::Next);

        session.announce().await;
        let eval = attempt(&mut session).await;
        assert!(!eval.correct);
        assert_eq!(session.missed_words(), &["banana"]);

        match session.advance().unwrap() {
            Advance::Complete(summary) => {
                assert_eq!(summary.total_words, 2);
                assert_eq!(summary.correct_count, 1);
                assert_eq!(summary.missed_words, vec!["banana"]);
                assert_eq!(summary.list_name, "Week1");
            }
            other => panic!("expected Complete, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_transcript_signals_no_speech_and_does_not_advance() {
        let listener = ScriptedListener::with_scripts(vec![
            vec![], // user said nothing
            vec!["c a t".to_string()],
        ]);
        let (mut session, _) = session_with(&["cat"], listener, EvaluationMode::Word);

        session.start_listening().await.unwrap();
        let result = session.stop_and_evaluate().await;
        assert!(matches!(result, Err(SessionError::NoSpeechDetected)));
        assert_eq!(session.current_index(), 0);
        assert!(session.correct_words().is_empty());
        assert!(session.missed_words().is_empty());

        // Retrying the same word works.
        let eval = attempt(&mut session).await;
        assert!(eval.correct);
        assert_eq!(session.current_index(), 0);
    }

    // ---- transcript handling ---

    #[tokio::test]
    async fn transcript_events_replace_not_append() {
        let listener = ScriptedListener::with_transcripts(["a", "a p", "a p p l e"]);
        let (mut session, _) = session_with(&["apple"], listener, EvaluationMode::Word);

        let eval = attempt(&mut session).await;
        assert_eq!(eval.heard, "a p p l e");
        assert!(eval.correct);
    }

    #[tokio::test]
    async fn undrained_events_are_picked_up_on_stop() {
        // The caller never awaits a transcript; stop_and_evaluate must still
        // see the latest delivered hypothesis.
        let listener = ScriptedListener::with_transcripts(["a", "apple"]);
        let (mut session, _) = session_with(&["apple"], listener, EvaluationMode::Word);

        session.start_listening().await.unwrap();
        let eval = session.stop_and_evaluate().await.unwrap().unwrap();
        assert_eq!(eval.heard, "apple");
        assert!(eval.correct);
    }

    // ---- no-op / guard paths ---

    #[tokio::test]
    async fn stop_outside_listening_is_a_no_op() {
        let (mut session, _) =
            session_with(&["cat"], ScriptedListener::silent(), EvaluationMode::Word);
        assert!(matches!(session.stop_and_evaluate().await, Ok(None)));
        assert_eq!(session.phase(), SessionPhase::AwaitingAnnouncement);
    }

    #[tokio::test]
    async fn listen_start_failure_does_not_enter_listening() {
        let (mut session, _) =
            session_with(&["cat"], ScriptedListener::failing(), EvaluationMode::Word);
        let err = session.start_listening().await.unwrap_err();
        assert!(matches!(err, SessionError::ListenStart(_)));
        assert_eq!(session.phase(), SessionPhase::AwaitingAnnouncement);
        assert_eq!(session.current_index(), 0);
    }

    #[tokio::test]
    async fn advance_before_evaluation_is_rejected() {
        let (mut session, _) =
            session_with(&["cat"], ScriptedListener::silent(), EvaluationMode::Word);
        assert!(matches!(session.advance(), Err(SessionError::NotEvaluated)));
    }

    #[tokio::test]
    async fn listening_after_evaluation_is_rejected() {
        let listener = ScriptedListener::with_transcripts(["c a t"]);
        let (mut session, _) = session_with(&["cat"], listener, EvaluationMode::Word);

        attempt(&mut session).await;
        let err = session.start_listening().await.unwrap_err();
        assert!(matches!(err, SessionError::AlreadyEvaluated));
    }

    #[tokio::test]
    async fn completed_session_rejects_further_operations() {
        let listener = ScriptedListener::with_transcripts(["c a t"]);
        let (mut session, _) = session_with(&["cat"], listener, EvaluationMode::Word);

        attempt(&mut session).await;
        assert!(matches!(session.advance(), Ok(Advance::Complete(_))));
        assert!(session.current_word().is_none());
        assert!(matches!(session.advance(), Err(SessionError::Complete)));
        assert!(matches!(
            session.start_listening().await,
            Err(SessionError::Complete)
        ));
    }

    // ---- repeat while listening ---

    #[tokio::test]
    async fn repeat_while_listening_cancels_and_discards() {
        let listener = ScriptedListener::with_scripts(vec![
            vec!["x y z".to_string()],
            vec!["c a t".to_string()],
        ]);
        let speaker = Arc::new(MockSpeaker::ok());
        let mut session = SpellingSession::new(
            WordList::new("Week1", ["cat"]),
            Arc::clone(&speaker) as Arc<dyn SpeechOutput>,
            Arc::new(listener),
            EvaluationMode::Word,
        )
        .unwrap();

        session.start_listening().await.unwrap();
        session.await_transcript().await;
        assert_eq!(session.pending_transcript(), "x y z");

        session.repeat_word().await;
        assert_eq!(session.pending_transcript(), "");
        assert_eq!(session.phase(), SessionPhase::AwaitingAnnouncement);
        assert_eq!(speaker.spoken(), vec!["cat"]);

        // The retry sees the second script, not stale events.
        let eval = attempt(&mut session).await;
        assert!(eval.correct);
    }

    #[tokio::test]
    async fn restarting_while_listening_supersedes_the_stream() {
        let listener = Arc::new(ScriptedListener::with_scripts(vec![
            vec!["x y z".to_string()],
            vec!["c a t".to_string()],
        ]));
        let mut session = SpellingSession::new(
            WordList::new("Week1", ["cat"]),
            Arc::new(MockSpeaker::ok()) as Arc<dyn SpeechOutput>,
            Arc::clone(&listener) as Arc<dyn SpeechInput>,
            EvaluationMode::Word,
        )
        .unwrap();

        session.start_listening().await.unwrap();
        session.await_transcript().await;
        assert_eq!(session.pending_transcript(), "x y z");

        // Second start stops the in-flight listen and discards the
        // pending transcript.
        session.start_listening().await.unwrap();
        assert_eq!(session.pending_transcript(), "");
        assert_eq!(session.phase(), SessionPhase::Listening);
        assert_eq!(listener.start_count(), 2);
        assert_eq!(listener.stop_count(), 1);

        // Only the second stream's events are judged.
        while session.await_transcript().await.is_some() {}
        let eval = session.stop_and_evaluate().await.unwrap().unwrap();
        assert_eq!(eval.heard, "c a t");
        assert!(eval.correct);
    }

    // ---- session invariant ---

    #[tokio::test]
    async fn correct_plus_missed_equals_evaluated_count() {
        let listener = ScriptedListener::with_scripts(vec![
            vec!["a p p l e".to_string()],
            vec!["wrong".to_string()],
            vec!["c h e r r y".to_string()],
        ]);
        let (mut session, _) = session_with(
            &["apple", "banana", "cherry"],
            listener,
            EvaluationMode::Word,
        );

        for expected_evaluated in 1..=3usize {
            attempt(&mut session).await;
            assert_eq!(
                session.correct_words().len() + session.missed_words().len(),
                expected_evaluated
            );
            let advance = session.advance().unwrap();
            if expected_evaluated < 3 {
                assert_eq!(advance, Advance::Next);
                assert_eq!(session.current_index(), expected_evaluated);
            } else {
                match advance {
                    Advance::Complete(summary) => {
                        assert_eq!(summary.total_words, 3);
                        assert_eq!(
                            summary.correct_count + summary.missed_words.len(),
                            3
                        );
                    }
                    other => panic!("expected Complete, got {other:?}"),
                }
            }
        }
    }

    // ---- letters mode ---

    #[tokio::test]
    async fn letters_mode_accepts_phonetic_letter_names() {
        let listener = ScriptedListener::with_transcripts(["bee ay tee"]);
        let (mut session, _) = session_with(&["bat"], listener, EvaluationMode::Letters);

        let eval = attempt(&mut session).await;
        assert!(eval.correct);
    }

    #[tokio::test]
    async fn letters_mode_still_rejects_wrong_letters() {
        let listener = ScriptedListener::with_transcripts(["bee ay see"]);
        let (mut session, _) = session_with(&["bat"], listener, EvaluationMode::Letters);

        let eval = attempt(&mut session).await;
        assert!(!eval.correct);
        assert_eq!(session.missed_words(), &["bat"]);
    }
}
