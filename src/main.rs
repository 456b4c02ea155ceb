//! Application entry point — PDF-to-Podcast command line.
//!
//! # Startup sequence
//!
//! 1. Load `.env` (if present) so `GEMINI_API_KEY` can live there.
//! 2. Initialise logging (`RUST_LOG` overrides the `info` default).
//! 3. Load [`AppConfig`] from disk (defaults on first run).
//! 4. Dispatch the subcommand:
//!    * `convert <pdf>` — run the pipeline, print the output path.
//!    * `voices` / `tones` / `info` — print JSON listings.
//!
//! A failed conversion exits with a code per [`FailureKind`].

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use pdf_to_podcast::{
    config::{AppConfig, API_KEY_ENV},
    pipeline::{ConversionRequest, FailureKind, PipelineError, PipelineStage, PodcastPipeline},
    podcast::{ServiceInfo, SpeakerOverride, ToneListing, VoiceListing},
};

/// Name suggested for a saved podcast when `--output` is a directory.
const DEFAULT_DOWNLOAD_NAME: &str = "podcast_overview.wav";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "pdf-to-podcast", version, about = "Turn a PDF into a two-host podcast audio overview")]
struct Cli {
    /// Settings file (default: platform config dir).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a PDF into a podcast WAV file.
    Convert(ConvertArgs),
    /// List supported voices and the per-speaker defaults.
    Voices,
    /// List conversation tones and the default tone.
    Tones,
    /// Describe the service and configured models.
    Info,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// PDF document to convert.
    pdf: PathBuf,

    /// Name of the first (curious) speaker.
    #[arg(long)]
    speaker1_name: Option<String>,

    /// Voice of the first speaker.
    #[arg(long)]
    speaker1_voice: Option<String>,

    /// Name of the second (explaining) speaker.
    #[arg(long)]
    speaker2_name: Option<String>,

    /// Voice of the second speaker.
    #[arg(long)]
    speaker2_voice: Option<String>,

    /// Conversation tone (see `tones`).
    #[arg(long)]
    tone: Option<String>,

    /// Copy the result here (a directory gets `podcast_overview.wav`).
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Keep the temporary file after copying it to `--output`.
    #[arg(long, requires = "output")]
    keep_temp: bool,
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

fn exit_code(kind: FailureKind) -> u8 {
    match kind {
        FailureKind::InvalidInput => 3,
        FailureKind::UpstreamGeneration => 4,
        FailureKind::UpstreamSynthesis => 5,
        FailureKind::InternalAssembly => 6,
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    // 1. .env
    let dotenv = dotenvy::dotenv();

    // 2. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Ok(path) = dotenv {
        log::debug!("loaded environment from {}", path.display());
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e
                .downcast_ref::<PipelineError>()
                .map(|p| exit_code(p.kind()))
                .unwrap_or(1);
            eprintln!("error: {e:#}");
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // 3. Configuration
    let config = match &cli.config {
        Some(path) => {
            let mut config = AppConfig::load_from(path)?;
            config.apply_api_key(std::env::var(API_KEY_ENV).ok());
            config
        }
        None => AppConfig::load()?,
    };

    // 4. Subcommand
    match cli.command {
        Command::Convert(args) => convert(&config, args).await,
        Command::Voices => print_json(&VoiceListing::new()),
        Command::Tones => print_json(&ToneListing::new()),
        Command::Info => print_json(&ServiceInfo::new(&config.gemini)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn convert(config: &AppConfig, args: ConvertArgs) -> Result<()> {
    let pipeline = PodcastPipeline::from_config(config).context("setting up the Gemini client")?;

    let bytes = tokio::fs::read(&args.pdf)
        .await
        .with_context(|| format!("reading {}", args.pdf.display()))?;
    let filename = args
        .pdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let request = ConversionRequest::new(bytes, filename)
        .with_speakers(
            SpeakerOverride::new(args.speaker1_name.as_deref(), args.speaker1_voice.as_deref()),
            SpeakerOverride::new(args.speaker2_name.as_deref(), args.speaker2_voice.as_deref()),
        )
        .with_tone(args.tone.as_deref());

    let (tx, progress) = spawn_progress();
    let result = pipeline.run_with_progress(request, &tx).await;
    drop(tx);
    if let Err(e) = progress.await {
        log::warn!("convert: progress reporter stopped: {e}");
    }
    let audio = result?;

    log::info!(
        "convert: {} ({}) and {} ({}), tone {}",
        audio.speaker1.name,
        audio.speaker1.voice,
        audio.speaker2.name,
        audio.speaker2.voice,
        audio.tone
    );

    let Some(output) = args.output else {
        println!("{}", audio.path.display());
        return Ok(());
    };

    let target = download_target(&output);
    tokio::fs::copy(&audio.path, &target)
        .await
        .with_context(|| format!("copying audio to {}", target.display()))?;

    if !args.keep_temp {
        if let Err(e) = audio.cleanup().await {
            log::warn!("convert: could not remove temporary file: {e}");
        }
    }
    println!("{}", target.display());
    Ok(())
}

/// Prints each stage on stderr so stdout carries only the result path.
/// Returns the number of stages seen once the sender is dropped.
fn spawn_progress() -> (mpsc::UnboundedSender<PipelineStage>, JoinHandle<usize>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<PipelineStage>();
    let handle = tokio::spawn(async move {
        let mut seen = 0;
        while let Some(stage) = rx.recv().await {
            eprintln!("[{}]", stage.label());
            seen += 1;
        }
        seen
    });
    (tx, handle)
}

/// `output` itself, or `output/podcast_overview.wav` when it is a directory.
fn download_target(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_DOWNLOAD_NAME)
    } else {
        output.to_path_buf()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn exit_codes_are_distinct_and_not_generic() {
        let codes = [
            exit_code(FailureKind::InvalidInput),
            exit_code(FailureKind::UpstreamGeneration),
            exit_code(FailureKind::UpstreamSynthesis),
            exit_code(FailureKind::InternalAssembly),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert!(*a > 2, "0-2 are reserved for success, generic and usage errors");
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn convert_args_parse() {
        let cli = Cli::parse_from([
            "pdf-to-podcast",
            "convert",
            "paper.pdf",
            "--speaker1-name",
            "Sam",
            "--speaker2-voice",
            "Kore",
            "--tone",
            "debate",
            "-o",
            "out.wav",
        ]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.pdf, PathBuf::from("paper.pdf"));
        assert_eq!(args.speaker1_name.as_deref(), Some("Sam"));
        assert_eq!(args.speaker2_voice.as_deref(), Some("Kore"));
        assert_eq!(args.tone.as_deref(), Some("debate"));
        assert_eq!(args.output, Some(PathBuf::from("out.wav")));
        assert!(!args.keep_temp);
    }

    #[test]
    fn keep_temp_requires_output() {
        assert!(Cli::try_parse_from(["pdf-to-podcast", "convert", "a.pdf", "--keep-temp"]).is_err());
    }

    #[tokio::test]
    async fn progress_reporter_drains_until_sender_drops() {
        let (tx, handle) = spawn_progress();
        for stage in [PipelineStage::Validating, PipelineStage::Scripting, PipelineStage::Done] {
            tx.send(stage).unwrap();
        }
        drop(tx);
        assert_eq!(handle.await.unwrap(), 3);
    }

    #[test]
    fn download_target_uses_default_name_for_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(download_target(dir.path()), dir.path().join("podcast_overview.wav"));

        let file = dir.path().join("mine.wav");
        assert_eq!(download_target(&file), file);
    }
}
