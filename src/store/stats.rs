//! Cumulative practice statistics.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AppPaths;
use crate::session::SessionSummary;

// ---------------------------------------------------------------------------
// PracticeStats
// ---------------------------------------------------------------------------

/// Totals, running average accuracy and daily streak across all sessions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeStats {
    /// Words evaluated across every completed session.
    pub total_words_studied: u64,
    /// Completed sessions.
    pub total_sessions: u64,
    /// Running average session accuracy, 0–100.
    pub average_accuracy: f32,
    /// Consecutive days with at least one completed session.
    pub streak_days: u32,
    /// Date of the most recent completed session.
    pub last_study_date: Option<NaiveDate>,
}

impl PracticeStats {
    /// Fold one completed session into the totals.
    ///
    /// Streak policy: same day keeps the streak, the day after extends it
    /// by one, any longer gap restarts at one.
    pub fn record(&mut self, words_studied: usize, accuracy_percent: f32, today: NaiveDate) {
        let new_sessions = self.total_sessions + 1;
        self.average_accuracy = (self.average_accuracy * self.total_sessions as f32
            + accuracy_percent)
            / new_sessions as f32;
        self.total_sessions = new_sessions;
        self.total_words_studied += words_studied as u64;

        self.streak_days = match self.last_study_date {
            None => 1,
            Some(last) => match (today - last).num_days() {
                0 => self.streak_days.max(1),
                1 => self.streak_days + 1,
                _ => 1,
            },
        };
        self.last_study_date = Some(today);
    }
}

// ---------------------------------------------------------------------------
// StatsStore
// ---------------------------------------------------------------------------

/// JSON-backed [`PracticeStats`], flushed after every recorded session.
pub struct StatsStore {
    stats: PracticeStats,
    path: PathBuf,
}

impl StatsStore {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Load from the platform config directory, or start from zero when the
    /// file does not exist yet.
    pub fn load_or_default() -> Self {
        Self::load_from(AppPaths::new().stats_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: PathBuf) -> Self {
        let stats = if path.exists() {
            let data = std::fs::read_to_string(&path).unwrap_or_default();
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            PracticeStats::default()
        };
        Self { stats, path }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Fold a session summary into the stats (dated today), then persist.
    pub fn record_session(&mut self, summary: &SessionSummary) {
        self.stats.record(
            summary.total_words,
            summary.accuracy_percent(),
            Utc::now().date_naive(),
        );
        self.save();
    }

    /// Replace the stats wholesale (import path), then persist.
    pub(crate) fn replace(&mut self, stats: PracticeStats) {
        self.stats = stats;
        self.save();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn stats(&self) -> &PracticeStats {
        &self.stats
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.stats) {
            Ok(data) => {
                if let Err(e) = std::fs::write(&self.path, data) {
                    log::error!("store: failed to write stats: {e}");
                }
            }
            Err(e) => log::error!("store: failed to serialize stats: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn first_session_starts_the_streak() {
        let mut stats = PracticeStats::default();
        stats.record(5, 80.0, day(1));

        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.total_words_studied, 5);
        assert!((stats.average_accuracy - 80.0).abs() < f32::EPSILON);
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.last_study_date, Some(day(1)));
    }

    #[test]
    fn average_accuracy_is_a_running_mean() {
        let mut stats = PracticeStats::default();
        stats.record(5, 100.0, day(1));
        stats.record(5, 50.0, day(1));
        assert!((stats.average_accuracy - 75.0).abs() < 0.001);
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut stats = PracticeStats::default();
        stats.record(5, 80.0, day(1));
        stats.record(5, 80.0, day(2));
        stats.record(5, 80.0, day(3));
        assert_eq!(stats.streak_days, 3);
    }

    #[test]
    fn same_day_keeps_the_streak() {
        let mut stats = PracticeStats::default();
        stats.record(5, 80.0, day(1));
        stats.record(5, 80.0, day(2));
        stats.record(5, 80.0, day(2));
        assert_eq!(stats.streak_days, 2);
    }

    #[test]
    fn a_gap_restarts_the_streak() {
        let mut stats = PracticeStats::default();
        stats.record(5, 80.0, day(1));
        stats.record(5, 80.0, day(2));
        stats.record(5, 80.0, day(5));
        assert_eq!(stats.streak_days, 1);
    }

    #[test]
    fn store_records_a_summary_and_persists() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("stats.json");

        {
            let mut store = StatsStore::load_from(path.clone());
            store.record_session(&SessionSummary {
                total_words: 4,
                correct_count: 3,
                missed_words: vec!["cat".into()],
                list_name: "Week 1".into(),
            });
        }

        let reloaded = StatsStore::load_from(path);
        assert_eq!(reloaded.stats().total_sessions, 1);
        assert_eq!(reloaded.stats().total_words_studied, 4);
        assert!((reloaded.stats().average_accuracy - 75.0).abs() < 0.001);
        assert_eq!(reloaded.stats().streak_days, 1);
    }
}
