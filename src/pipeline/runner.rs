//! Pipeline orchestrator — drives one PDF → podcast conversion.
//!
//! # Pipeline flow
//!
//! ```text
//! ConversionRequest
//!   └─▶ check .pdf extension                          [Validating]
//!   └─▶ spawn_blocking(TextExtractor::extract)        [Extracting]
//!         └─ blank text → InvalidInput (no model calls)
//!   └─▶ resolve tone + speakers, build prompt
//!   └─▶ ScriptWriter::generate                        [Scripting]
//!   └─▶ SpeechSynthesizer::synthesize (streamed)      [Synthesizing]
//!   └─▶ write {prefix}_{uuid}.wav                     [Saving]
//!   └─▶ PodcastAudio                                  [Done]
//! any stage ──error──▶ PipelineError                  [Failed]
//! ```
//!
//! Stages run strictly in sequence and nothing touches the filesystem before
//! `Saving`, so a failed or dropped run leaves no file behind.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::document::{extract_text, has_document_extension, PdfTextExtractor, TextExtractor};
use crate::gemini::{GeminiClient, GeminiError, GenerativeModel};
use crate::llm::{PromptBuilder, ScriptWriter};
use crate::podcast::{resolve_tone, SpeakerConfig, SpeakerOverride, SpeakerResolver};
use crate::tts::{SpeechSynthesizer, SynthesisError};

use super::state::PipelineStage;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Coarse failure categories a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Wrong file type, unreadable document or no extractable text.
    InvalidInput,
    /// The text model failed to produce a script.
    UpstreamGeneration,
    /// The speech model failed or produced no audio.
    UpstreamSynthesis,
    /// The finished audio could not be written.
    InternalAssembly,
}

/// Errors that end a conversion.  No partial audio is ever returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("script generation failed: {0}")]
    UpstreamGeneration(#[source] GeminiError),

    #[error("speech synthesis failed: {0}")]
    UpstreamSynthesis(#[from] SynthesisError),

    #[error("failed to write audio to {}: {source}", path.display())]
    InternalAssembly {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::InvalidInput(_) => FailureKind::InvalidInput,
            PipelineError::UpstreamGeneration(_) => FailureKind::UpstreamGeneration,
            PipelineError::UpstreamSynthesis(_) => FailureKind::UpstreamSynthesis,
            PipelineError::InternalAssembly { .. } => FailureKind::InternalAssembly,
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionRequest / PodcastAudio
// ---------------------------------------------------------------------------

/// Input for one conversion.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Raw document bytes.
    pub document: Arc<[u8]>,
    /// Original file name; only its extension is checked.
    pub filename: String,
    pub speaker1: SpeakerOverride,
    pub speaker2: SpeakerOverride,
    /// Tone preset key; unknown or absent keys use the default tone.
    pub tone: Option<String>,
}

impl ConversionRequest {
    pub fn new(document: impl Into<Arc<[u8]>>, filename: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            filename: filename.into(),
            speaker1: SpeakerOverride::default(),
            speaker2: SpeakerOverride::default(),
            tone: None,
        }
    }

    pub fn with_speakers(mut self, speaker1: SpeakerOverride, speaker2: SpeakerOverride) -> Self {
        self.speaker1 = speaker1;
        self.speaker2 = speaker2;
        self
    }

    pub fn with_tone(mut self, tone: Option<&str>) -> Self {
        self.tone = tone.map(str::to_string);
        self
    }
}

/// A finished podcast on disk.  The caller owns the file; nothing deletes it
/// automatically.
#[derive(Debug, Clone)]
pub struct PodcastAudio {
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    pub speaker1: SpeakerConfig,
    pub speaker2: SpeakerConfig,
    /// Key of the tone preset actually used.
    pub tone: &'static str,
}

impl PodcastAudio {
    /// Delete the audio file.
    pub async fn cleanup(self) -> std::io::Result<()> {
        tokio::fs::remove_file(&self.path).await?;
        log::debug!("pipeline: removed {}", self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PodcastPipeline
// ---------------------------------------------------------------------------

/// Runs conversions.  Holds no per-run state, so one instance can serve
/// concurrent requests.
///
/// ```rust,no_run
/// use pdf_to_podcast::config::AppConfig;
/// use pdf_to_podcast::pipeline::{ConversionRequest, PodcastPipeline};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = AppConfig::load()?;
/// let pipeline = PodcastPipeline::from_config(&config)?;
///
/// let bytes = std::fs::read("paper.pdf")?;
/// let audio = pipeline
///     .run(ConversionRequest::new(bytes, "paper.pdf").with_tone(Some("educational")))
///     .await?;
/// println!("{} ({} bytes)", audio.path.display(), audio.size);
/// # Ok(())
/// # }
/// ```
pub struct PodcastPipeline {
    extractor: Arc<dyn TextExtractor>,
    resolver: SpeakerResolver,
    prompt: PromptBuilder,
    script: ScriptWriter,
    speech: SpeechSynthesizer,
    output_dir: PathBuf,
    file_prefix: String,
}

impl PodcastPipeline {
    /// Build a pipeline around `model` (used for both the script and the
    /// speech call) with the PDF extractor and a random name shuffle.
    pub fn new(config: &AppConfig, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            extractor: Arc::new(PdfTextExtractor),
            resolver: SpeakerResolver::default(),
            prompt: PromptBuilder::new(config.prompt.max_document_chars),
            script: ScriptWriter::from_config(model.clone(), &config.gemini),
            speech: SpeechSynthesizer::from_config(model, &config.gemini),
            output_dir: config.output.resolved_dir(),
            file_prefix: config.output.file_prefix.clone(),
        }
    }

    /// Build a pipeline talking to the Gemini REST API.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeminiError> {
        let client = GeminiClient::from_config(&config.gemini)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_resolver(mut self, resolver: SpeakerResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run one conversion.
    pub async fn run(&self, request: ConversionRequest) -> Result<PodcastAudio, PipelineError> {
        self.execute(request, None).await
    }

    /// Run one conversion, publishing stage transitions on `progress`.  A
    /// closed receiver is ignored.
    pub async fn run_with_progress(
        &self,
        request: ConversionRequest,
        progress: &mpsc::UnboundedSender<PipelineStage>,
    ) -> Result<PodcastAudio, PipelineError> {
        self.execute(request, Some(progress)).await
    }

    async fn execute(
        &self,
        request: ConversionRequest,
        progress: Option<&mpsc::UnboundedSender<PipelineStage>>,
    ) -> Result<PodcastAudio, PipelineError> {
        let t0 = Instant::now();
        let report = |stage: PipelineStage| {
            log::debug!("pipeline: → {:?}", stage);
            if let Some(tx) = progress {
                let _ = tx.send(stage);
            }
        };

        match self.stages(request, &report).await {
            Ok(audio) => {
                report(PipelineStage::Done);
                log::info!(
                    "pipeline: wrote {} ({} bytes) in {}ms",
                    audio.path.display(),
                    audio.size,
                    t0.elapsed().as_millis()
                );
                Ok(audio)
            }
            Err(e) => {
                report(PipelineStage::Failed);
                log::error!("pipeline: {}", e);
                Err(e)
            }
        }
    }

    async fn stages(
        &self,
        request: ConversionRequest,
        report: &(dyn Fn(PipelineStage) + Sync),
    ) -> Result<PodcastAudio, PipelineError> {
        // ── 1. Validate ──────────────────────────────────────────────────
        report(PipelineStage::Validating);
        if !has_document_extension(&request.filename) {
            return Err(PipelineError::InvalidInput(format!(
                "{:?} is not a PDF file",
                request.filename
            )));
        }

        // ── 2. Extract ───────────────────────────────────────────────────
        report(PipelineStage::Extracting);
        let text = extract_text(self.extractor.clone(), request.document.clone())
            .await
            .map_err(|e| PipelineError::InvalidInput(e.to_string()))?;
        if text.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "no text could be extracted from the PDF".into(),
            ));
        }
        log::info!(
            "pipeline: extracted {} chars from {}",
            text.chars().count(),
            request.filename
        );

        // ── 3-5. Tone, speakers, prompt ──────────────────────────────────
        let tone = resolve_tone(request.tone.as_deref());
        let (speaker1, speaker2) = self.resolver.resolve(&request.speaker1, &request.speaker2);
        log::info!(
            "pipeline: {} ({}) and {} ({}), tone {}",
            speaker1.name,
            speaker1.voice,
            speaker2.name,
            speaker2.voice,
            tone.key
        );
        let prompt = self.prompt.build(&text, &speaker1, &speaker2, Some(tone.key));

        // ── 6. Script ────────────────────────────────────────────────────
        report(PipelineStage::Scripting);
        let script = self
            .script
            .generate(&prompt)
            .await
            .map_err(PipelineError::UpstreamGeneration)?;

        // ── 7. Speech ────────────────────────────────────────────────────
        report(PipelineStage::Synthesizing);
        let audio = self.speech.synthesize(&script, &speaker1, &speaker2).await?;

        // ── 8. Save ──────────────────────────────────────────────────────
        report(PipelineStage::Saving);
        let path = self.write_output(&audio).await?;

        Ok(PodcastAudio {
            path,
            size: audio.len() as u64,
            speaker1,
            speaker2,
            tone: tone.key,
        })
    }

    async fn write_output(&self, audio: &[u8]) -> Result<PathBuf, PipelineError> {
        let path = self
            .output_dir
            .join(format!("{}_{}.wav", self.file_prefix, Uuid::new_v4().simple()));

        let result = async {
            tokio::fs::create_dir_all(&self.output_dir).await?;
            tokio::fs::write(&path, audio).await
        }
        .await;

        if let Err(source) = result {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(PipelineError::InternalAssembly { path, source });
        }
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
