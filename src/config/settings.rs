//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variable that overrides [`GeminiConfig::api_key`].
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// ---------------------------------------------------------------------------
// GeminiConfig
// ---------------------------------------------------------------------------

/// Connection and model settings for the Gemini API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Base URL of the API, without the `/v1beta` path.
    pub base_url: String,
    /// API key.  `GEMINI_API_KEY` takes precedence when set.
    pub api_key: Option<String>,
    /// Text model that writes the dialogue script.
    pub script_model: String,
    /// Multi-speaker TTS model that reads the script aloud.
    pub tts_model: String,
    /// Sampling temperature for both calls.
    pub temperature: f32,
    /// Maximum seconds for one API call, including the streamed body.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".into(),
            api_key: None,
            script_model: "gemini-1.5-flash".into(),
            tts_model: "gemini-2.5-pro-preview-tts".into(),
            temperature: 0.8,
            timeout_secs: 300,
        }
    }
}

// ---------------------------------------------------------------------------
// PromptConfig
// ---------------------------------------------------------------------------

/// Settings for the script prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Document characters kept before truncation.
    pub max_document_chars: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_document_chars: 4_000,
        }
    }
}

// ---------------------------------------------------------------------------
// OutputConfig
// ---------------------------------------------------------------------------

/// Where finished audio files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory.  `None` means the platform temp dir.
    pub dir: Option<PathBuf>,
    /// File-name prefix; a random suffix and `.wav` are appended.
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_prefix: "podcast_audio".into(),
        }
    }
}

impl OutputConfig {
    /// The configured directory, or the platform temp dir.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().output_dir)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use pdf_to_podcast::config::AppConfig;
///
/// // Missing file → defaults; GEMINI_API_KEY applied on top.
/// let config = AppConfig::load().unwrap();
/// println!("script model: {}", config.gemini.script_model);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub prompt: PromptConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load from the platform-appropriate `settings.toml` and apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&AppPaths::new().settings_file)?;
        config.apply_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load from an explicit path without environment overrides.  Returns
    /// `Default` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Replace the API key with `key` when it is a non-empty string.
    pub fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.gemini.api_key = Some(key);
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

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config.gemini.script_model, "gemini-1.5-flash");
        assert_eq!(config.prompt.max_document_chars, 4_000);
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.gemini.base_url, "https://generativelanguage.googleapis.com");
        assert!(cfg.gemini.api_key.is_none());
        assert_eq!(cfg.gemini.tts_model, "gemini-2.5-pro-preview-tts");
        assert!((cfg.gemini.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(cfg.gemini.timeout_secs, 300);
        assert!(cfg.output.dir.is_none());
        assert_eq!(cfg.output.file_prefix, "podcast_audio");
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.gemini.base_url = "http://localhost:9000".into();
        cfg.gemini.api_key = Some("abc".into());
        cfg.gemini.timeout_secs = 30;
        cfg.prompt.max_document_chars = 1_000;
        cfg.output.dir = Some(dir.path().to_path_buf());

        std::fs::write(&path, toml::to_string_pretty(&cfg).expect("serialise")).expect("write");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.gemini.base_url, "http://localhost:9000");
        assert_eq!(loaded.gemini.api_key.as_deref(), Some("abc"));
        assert_eq!(loaded.gemini.timeout_secs, 30);
        assert_eq!(loaded.prompt.max_document_chars, 1_000);
        assert_eq!(loaded.output.dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[gemini]\nscript_model = \"gemini-2.0-flash\"\n").unwrap();

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.gemini.script_model, "gemini-2.0-flash");
        assert_eq!(loaded.gemini.tts_model, "gemini-2.5-pro-preview-tts");
        assert_eq!(loaded.output.file_prefix, "podcast_audio");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "gemini = [").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn api_key_override_ignores_blank_values() {
        let mut cfg = AppConfig::default();
        cfg.gemini.api_key = Some("from-file".into());

        cfg.apply_api_key(Some("  ".into()));
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("from-file"));

        cfg.apply_api_key(None);
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("from-file"));

        cfg.apply_api_key(Some("from-env".into()));
        assert_eq!(cfg.gemini.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn output_dir_defaults_to_temp() {
        let cfg = OutputConfig::default();
        assert_eq!(cfg.resolved_dir(), std::env::temp_dir());
    }
}
