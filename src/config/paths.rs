//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout (config dir):
//!   Windows: %APPDATA%\spellmaster\
//!   macOS:   ~/Library/Application Support/spellmaster/
//!   Linux:   ~/.config/spellmaster/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for settings and all store files.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `missed-words.json`.
    pub missed_words_file: PathBuf,
    /// Full path to `custom-lists.json`.
    pub custom_lists_file: PathBuf,
    /// Full path to `stats.json`.
    pub stats_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "spellmaster";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let missed_words_file = config_dir.join("missed-words.json");
        let custom_lists_file = config_dir.join("custom-lists.json");
        let stats_file = config_dir.join("stats.json");

        Self {
            config_dir,
            settings_file,
            missed_words_file,
            custom_lists_file,
            stats_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
