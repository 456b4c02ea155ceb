//! Pipeline orchestrator module for PDF-to-Podcast.
//!
//! This module wires the full document → script → speech → file pipeline
//! and the stage reporting a front end can display.
//!
//! # Architecture
//!
//! ```text
//! ConversionRequest
//!        │
//!        ▼
//! PodcastPipeline::run()  ← async, one task per request
//!        │
//!        ├─ spawn_blocking(TextExtractor::extract)
//!        ├─ SpeakerResolver / resolve_tone / PromptBuilder   (pure)
//!        ├─ ScriptWriter::generate        → generateContent
//!        ├─ SpeechSynthesizer::synthesize → streamGenerateContent (SSE)
//!        └─ tokio::fs::write({prefix}_{uuid}.wav)
//!
//! PipelineStage (mpsc) ───▶ progress display
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use tokio::sync::mpsc;
//! use pdf_to_podcast::config::AppConfig;
//! use pdf_to_podcast::pipeline::{ConversionRequest, PipelineStage, PodcastPipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let pipeline = PodcastPipeline::from_config(&config)?;
//!
//!     let (tx, mut rx) = mpsc::unbounded_channel::<PipelineStage>();
//!     tokio::spawn(async move {
//!         while let Some(stage) = rx.recv().await {
//!             println!("{}", stage.label());
//!         }
//!     });
//!
//!     let bytes = std::fs::read("paper.pdf")?;
//!     let audio = pipeline
//!         .run_with_progress(ConversionRequest::new(bytes, "paper.pdf"), &tx)
//!         .await?;
//!     println!("{}", audio.path.display());
//!     Ok(())
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{ConversionRequest, FailureKind, PipelineError, PodcastAudio, PodcastPipeline};
pub use state::PipelineStage;
