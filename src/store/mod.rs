//! Persistent stores for practice data.
//!
//! One JSON file per concern under the platform config directory, loaded
//! eagerly at construction and flushed on every mutation. Each store is an
//! explicit object passed to the code that needs it — there are no implicit
//! singletons, and every constructor has a `load_from(path)` variant so
//! tests run against a temp directory.
//!
//! * [`MissedWordStore`] — words missed across sessions, queued for review.
//! * [`CustomListStore`] — user-created word lists.
//! * [`StatsStore`] — cumulative practice statistics and daily streak.
//! * [`export`] — bundle/restore all of the above as one JSON document.

pub mod export;
pub mod lists;
pub mod missed;
pub mod stats;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use export::{export_user_data, import_user_data, UserDataExport, EXPORT_VERSION};
pub use lists::{CustomListStore, CustomWordList};
pub use missed::MissedWordStore;
pub use stats::{PracticeStats, StatsStore};
