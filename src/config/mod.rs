//! Configuration module for PDF-to-Podcast.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the Gemini
//! client, prompt and output, `AppPaths` for cross-platform directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, GeminiConfig, OutputConfig, PromptConfig, API_KEY_ENV};
