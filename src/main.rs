//! CLI practice shell for Spellmaster.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the missed-word, custom-list and stats stores.
//! 4. Resolve the requested word list (argument, last selected, or week1).
//! 5. Run one spelling session word by word — typed stdin lines stand in
//!    for the speech recognizer.
//! 6. Print the summary and persist missed words, stats and the selection.
//!
//! Usage: `spellmaster [LIST]` where LIST is a built-in id (`week1`…`week4`,
//! `all`), a custom list name, or `missed` for the review list.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use spellmaster::catalog::{self, WordList, BUILTIN_LISTS};
use spellmaster::config::AppConfig;
use spellmaster::session::{Advance, SessionError, SpellingSession};
use spellmaster::speech::{ConsoleSpeaker, LineListener, SpeechInput, SpeechOutput};
use spellmaster::store::{CustomListStore, MissedWordStore, StatsStore};

/// Id used on the command line for the accumulated missed-word list.
const MISSED_LIST_ID: &str = "missed";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut config = AppConfig::load().context("loading settings")?;
    let mut missed_store = MissedWordStore::load_or_default();
    let mut list_store = CustomListStore::load_or_default();
    let mut stats_store = StatsStore::load_or_default();

    let requested = std::env::args().nth(1).or_else(|| {
        let last = config.last_selected_list.clone();
        if let Some(id) = &last {
            log::info!("no list requested, using last selected {id:?}");
        }
        last
    });
    let list_id = requested.unwrap_or_else(|| "week1".to_string());

    let list = resolve_list(&list_id, &missed_store, &list_store)?;
    println!(
        "Practising {:?} — {} words. Type the spelling you would say aloud.",
        list.name(),
        list.len()
    );
    println!("Commands: !repeat to hear the word again, !quit to stop.\n");

    let speaker: Arc<dyn SpeechOutput> = Arc::new(ConsoleSpeaker::new(config.speech.rate));
    let listener: Arc<dyn SpeechInput> = Arc::new(LineListener::new());
    let mut session = SpellingSession::new(
        list,
        speaker,
        listener,
        config.practice.evaluation_mode,
    )?;

    let summary = loop {
        session.announce().await;

        let evaluation = loop {
            let prompt = if config.practice.show_word_hints {
                format!(
                    "[{}/{}] Spell {:?}: ",
                    session.current_index() + 1,
                    session.total_words(),
                    session.current_word().unwrap_or_default()
                )
            } else {
                format!(
                    "[{}/{}] Spell the word you heard: ",
                    session.current_index() + 1,
                    session.total_words()
                )
            };
            print!("{prompt}");
            use std::io::Write;
            std::io::stdout().flush().ok();

            session.start_listening().await?;
            if session.await_transcript().await.is_none() {
                // stdin closed — treat like quitting mid-session.
                bail!("input stream closed before the session finished");
            }

            match session.pending_transcript().trim() {
                "!quit" => {
                    println!("Stopping here — nothing from this session was saved.");
                    return Ok(());
                }
                "!repeat" => {
                    session.repeat_word().await;
                    continue;
                }
                _ => {}
            }

            match session.stop_and_evaluate().await {
                Ok(Some(evaluation)) => break evaluation,
                Ok(None) => continue,
                Err(SessionError::NoSpeechDetected) => {
                    println!("We couldn't hear anything. Please try again.");
                    if config.speech.auto_repeat {
                        session.repeat_word().await;
                    }
                    continue;
                }
                Err(e) => return Err(e).context("evaluating the attempt"),
            }
        };

        if evaluation.correct {
            println!("✅ Correct! {:?} it is.\n", evaluation.word);
        } else {
            println!(
                "❌ Not quite — we heard {:?}. The word was {:?}.\n",
                evaluation.heard, evaluation.word
            );
        }

        match session.advance()? {
            Advance::Next => continue,
            Advance::Complete(summary) => break summary,
        }
    };

    // ── Results + persistence ─────────────────────────────────────────────
    println!("Session complete — {}!", summary.list_name);
    println!(
        "  {} / {} correct ({:.0}%)",
        summary.correct_count,
        summary.total_words,
        summary.accuracy_percent()
    );
    if !summary.missed_words.is_empty() {
        println!(
            "  Saved for future practice: {}",
            summary.missed_words.join(", ")
        );
    }

    // Nothing is persisted until here, so quitting mid-session leaves
    // every store and the settings untouched.
    config.last_selected_list = Some(list_id.clone());
    config.save().context("saving settings")?;
    list_store.record_usage(&list_id);
    missed_store.add_missed(&summary.missed_words);
    stats_store.record_session(&summary);

    let stats = stats_store.stats();
    println!(
        "  All time: {} sessions, {} words, {:.0}% average, {}-day streak",
        stats.total_sessions,
        stats.total_words_studied,
        stats.average_accuracy,
        stats.streak_days
    );

    Ok(())
}

/// Turn a list id into a concrete [`WordList`].
///
/// Resolution order: built-in catalog, the missed-word review list, then
/// custom lists by name.
fn resolve_list(
    id: &str,
    missed: &MissedWordStore,
    custom: &CustomListStore,
) -> Result<WordList> {
    if let Some(list) = catalog::find_builtin(id) {
        return Ok(list);
    }

    if id == MISSED_LIST_ID {
        if missed.is_empty() {
            bail!("no missed words to review yet — practise a list first");
        }
        return Ok(WordList::new("Missed Words", missed.words()));
    }

    if let Some(list) = custom.get(id) {
        return Ok(list.to_word_list());
    }

    let builtin_ids: Vec<&str> = BUILTIN_LISTS.iter().map(|l| l.id).collect();
    bail!(
        "unknown list {id:?} — built-in lists: {}, plus {MISSED_LIST_ID:?} and any custom list name",
        builtin_ids.join(", ")
    );
}
