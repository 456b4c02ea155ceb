//! Script generation for PDF-to-Podcast.
//!
//! This module provides:
//! * [`PromptBuilder`] — renders the two-speaker dialogue instruction.
//! * [`ScriptWriter`] — sends the prompt to a text model and returns the
//!   dialogue script.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pdf_to_podcast::config::AppConfig;
//! use pdf_to_podcast::gemini::GeminiClient;
//! use pdf_to_podcast::llm::{PromptBuilder, ScriptWriter};
//! use pdf_to_podcast::podcast::{SpeakerOverride, SpeakerResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let client = Arc::new(GeminiClient::from_config(&config.gemini)?);
//!
//!     let (alex, jordan) = SpeakerResolver::default()
//!         .resolve(&SpeakerOverride::default(), &SpeakerOverride::default());
//!     let prompt = PromptBuilder::new(config.prompt.max_document_chars)
//!         .build("Document text…", &alex, &jordan, Some("educational"));
//!
//!     let script = ScriptWriter::from_config(client, &config.gemini)
//!         .generate(&prompt)
//!         .await?;
//!     println!("{}", script);
//!     Ok(())
//! }
//! ```

pub mod prompt;
pub mod script;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use prompt::{truncate_document, PromptBuilder, DEFAULT_MAX_DOCUMENT_CHARS};
pub use script::ScriptWriter;
