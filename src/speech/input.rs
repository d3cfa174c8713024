//! Speech-input collaborator: transcript event streams.
//!
//! `start_listening` hands the caller a fresh `mpsc::Receiver<String>`.
//! Each event carries the recognizer's **latest whole-utterance hypothesis**,
//! not an increment — consumers keep only the most recent value. Dropping
//! the receiver is how a caller stops trusting stale events after a stop
//! request.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::SpeechError;

/// Buffer size for transcript event channels. Hypotheses supersede each
/// other, so a small buffer is enough; senders drop events on overflow.
const TRANSCRIPT_CHANNEL_CAPACITY: usize = 16;

// ---------------------------------------------------------------------------
// SpeechInput trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for capturing spoken text.
///
/// # Contract
///
/// - `start_listening` opens a stream and returns its receiver. Zero or
///   more transcript events are delivered while the stream is active.
/// - `stop_listening` ends the stream. Implementations should stop sending
///   promptly, but consumers must not rely on it — they drop the receiver.
/// - Starting a new stream supersedes any previous one.
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Begin capturing speech; returns the transcript event stream.
    async fn start_listening(&self) -> Result<mpsc::Receiver<String>, SpeechError>;

    /// Stop capturing speech.
    async fn stop_listening(&self) -> Result<(), SpeechError>;
}

// Compile-time assertion: Box<dyn SpeechInput> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechInput>) {}
};

// ---------------------------------------------------------------------------
// LineListener
// ---------------------------------------------------------------------------

/// CLI stand-in for a speech recognizer.
///
/// One typed stdin line becomes one transcript event. The blocking read
/// runs on the tokio blocking thread pool so the async runtime never stalls.
/// On end of input (stdin closed) the stream closes without an event, so
/// consumers observe `None` rather than an empty transcript. There is
/// nothing to cancel on `stop_listening`: the reader task ends after a
/// single line, and any line typed after a stop lands in a channel whose
/// receiver has been dropped.
#[derive(Debug, Default)]
pub struct LineListener;

impl LineListener {
    pub fn new() -> Self {
        Self
    }

    /// Forward at most one line from `reader` as a transcript event.
    ///
    /// `read_line` returning zero bytes means end of input; the sender is
    /// dropped without an event so the receiver sees the stream close.
    fn forward_line(mut reader: impl std::io::BufRead, tx: mpsc::Sender<String>) {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {}
            Ok(_) => {
                // Receiver may already be gone if the caller stopped.
                let _ = tx.blocking_send(line.trim_end().to_string());
            }
            Err(e) => log::warn!("speech: stdin read failed: {e}"),
        }
    }
}

#[async_trait]
impl SpeechInput for LineListener {
    async fn start_listening(&self) -> Result<mpsc::Receiver<String>, SpeechError> {
        let (tx, rx) = mpsc::channel(TRANSCRIPT_CHANNEL_CAPACITY);

        tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            Self::forward_line(stdin.lock(), tx);
        });

        Ok(rx)
    }

    async fn stop_listening(&self) -> Result<(), SpeechError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ScriptedListener  (test-only)
// ---------------------------------------------------------------------------

/// Test double that replays scripted transcript hypotheses.
///
/// Each `start_listening` call delivers one script into a fresh channel, so
/// a session under test observes the same event sequence a real recognizer
/// would produce. [`with_transcripts`](Self::with_transcripts) replays the
/// same script on every start; [`with_scripts`](Self::with_scripts) plays a
/// different script per start (exhausted → silence). Start/stop calls are
/// counted for assertions.
#[cfg(test)]
pub struct ScriptedListener {
    mode: std::sync::Mutex<ScriptMode>,
    fail_start: bool,
    starts: std::sync::atomic::AtomicUsize,
    stops: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
enum ScriptMode {
    Repeat(Vec<String>),
    Sequence(std::collections::VecDeque<Vec<String>>),
}

#[cfg(test)]
impl ScriptedListener {
    fn with_mode(mode: ScriptMode) -> Self {
        Self {
            mode: std::sync::Mutex::new(mode),
            fail_start: false,
            starts: std::sync::atomic::AtomicUsize::new(0),
            stops: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Listener that emits each of `transcripts` as one event, in order, on
    /// every `start_listening` call.
    pub fn with_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_mode(ScriptMode::Repeat(
            transcripts.into_iter().map(Into::into).collect(),
        ))
    }

    /// Listener that plays the next script per `start_listening` call.
    pub fn with_scripts(scripts: Vec<Vec<String>>) -> Self {
        Self::with_mode(ScriptMode::Sequence(scripts.into()))
    }

    /// Listener that emits no events at all (user said nothing).
    pub fn silent() -> Self {
        Self::with_transcripts(Vec::<String>::new())
    }

    /// Listener whose `start_listening` always fails.
    pub fn failing() -> Self {
        let mut listener = Self::silent();
        listener.fail_start = true;
        listener
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechInput for ScriptedListener {
    async fn start_listening(&self) -> Result<mpsc::Receiver<String>, SpeechError> {
        self.starts
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.fail_start {
            return Err(SpeechError::ListenStart("mock failure".into()));
        }

        let script: Vec<String> = {
            let mut mode = self.mode.lock().unwrap();
            match &mut *mode {
                ScriptMode::Repeat(script) => script.clone(),
                ScriptMode::Sequence(scripts) => scripts.pop_front().unwrap_or_default(),
            }
        };

        let (tx, rx) = mpsc::channel(TRANSCRIPT_CHANNEL_CAPACITY.max(script.len() + 1));
        for transcript in script {
            // Buffered channel sized to the script — send cannot block.
            tx.try_send(transcript).expect("scripted channel overflow");
        }
        Ok(rx)
    }

    async fn stop_listening(&self) -> Result<(), SpeechError> {
        self.stops.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
