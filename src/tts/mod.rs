//! Multi-speaker speech synthesis.
//!
//! * [`SpeechSynthesizer`] — one streaming TTS request per script.
//! * [`AudioAssembler`] / [`collect_audio`] — folds the streamed chunks into
//!   one waveform buffer.
//! * [`SynthesisError`] — error variants for synthesis.

pub mod assembler;
pub mod synthesizer;

use thiserror::Error;

use crate::gemini::GeminiError;

pub use assembler::{collect_audio, AudioAssembler};
pub use synthesizer::SpeechSynthesizer;

/// Errors that can occur while synthesising speech.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The TTS request or its stream failed.
    #[error("speech model request failed: {0}")]
    Upstream(#[from] GeminiError),

    /// An inline audio payload was not valid base64.
    #[error("invalid audio payload: {0}")]
    Decode(String),

    /// The stream ended without a single audio chunk.
    #[error("no audio generated")]
    NoAudio,
}
