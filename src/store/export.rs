//! Export / import of all user data as one JSON document.
//!
//! The bundle lets a family move practice data to a new device without any
//! sync service. Import replaces the receiving stores wholesale.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lists::{CustomListStore, CustomWordList};
use super::missed::MissedWordStore;
use super::stats::{PracticeStats, StatsStore};

/// Format tag written into every export; imports reject anything else.
pub const EXPORT_VERSION: &str = "1";

// ---------------------------------------------------------------------------
// UserDataExport
// ---------------------------------------------------------------------------

/// The complete user-data bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataExport {
    /// Format version, see [`EXPORT_VERSION`].
    pub version: String,
    /// When the bundle was produced.
    pub export_date: DateTime<Utc>,
    pub custom_word_lists: Vec<CustomWordList>,
    pub missed_words: Vec<String>,
    pub stats: PracticeStats,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Bundle the three stores into a pretty-printed JSON document.
pub fn export_user_data(
    lists: &CustomListStore,
    missed: &MissedWordStore,
    stats: &StatsStore,
) -> Result<String> {
    let bundle = UserDataExport {
        version: EXPORT_VERSION.to_string(),
        export_date: Utc::now(),
        custom_word_lists: lists.all().to_vec(),
        missed_words: missed.words().to_vec(),
        stats: stats.stats().clone(),
    };
    serde_json::to_string_pretty(&bundle).context("serializing user data export")
}

/// Parse a bundle and replace the contents of the three stores.
///
/// Fails without touching any store when the document does not parse or
/// carries an unknown version tag.
pub fn import_user_data(
    json: &str,
    lists: &mut CustomListStore,
    missed: &mut MissedWordStore,
    stats: &mut StatsStore,
) -> Result<()> {
    let bundle: UserDataExport =
        serde_json::from_str(json).context("parsing user data export")?;
    if bundle.version != EXPORT_VERSION {
        bail!("unsupported export version {:?}", bundle.version);
    }

    lists.replace(bundle.custom_word_lists);
    missed.replace(bundle.missed_words);
    stats.replace(bundle.stats);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
