//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared freely.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// EvaluationMode
// ---------------------------------------------------------------------------

/// How a stopped transcript is compared against the expected word.
///
/// | Variant  | Evaluation                                              |
/// |----------|---------------------------------------------------------|
/// | Word     | Three-way match on the raw transcript                   |
/// | Letters  | Phonetic letter extraction first, then the same match   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationMode {
    /// Match the normalized transcript directly ("apple" / "a p p l e").
    Word,
    /// Run the phonetic letter extractor first, so "bee ay see" can spell
    /// "bac". Tolerates letter-name pronunciations at the cost of being
    /// stricter about whole-word answers.
    Letters,
}

impl Default for EvaluationMode {
    fn default() -> Self {
        Self::Word
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-output collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Announcement speed (1.0 = normal). Children follow slower speech, so
    /// the default is below normal.
    pub rate: f32,
    /// Re-announce the word automatically when no speech was detected.
    pub auto_repeat: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            rate: 0.8,
            auto_repeat: true,
        }
    }
}

// ---------------------------------------------------------------------------
// PracticeConfig
// ---------------------------------------------------------------------------

/// Settings for how a practice session behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeConfig {
    /// Show the current word while the child is spelling it.
    pub show_word_hints: bool,
    /// Transcript evaluation mode.
    pub evaluation_mode: EvaluationMode,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            show_word_hints: true,
            evaluation_mode: EvaluationMode::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use spellmaster::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Speech-output settings.
    pub speech: SpeechConfig,
    /// Practice-session settings.
    pub practice: PracticeConfig,
    /// Id of the most recently practised list (built-in id, custom list
    /// name, or `"missed"`). `None` until the first session completes.
    pub last_selected_list: Option<String>,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
