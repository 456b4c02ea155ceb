//! Gemini REST client.
//!
//! This module provides:
//! * [`GenerativeModel`] — async trait for `generateContent` and its
//!   streaming variant; the pipeline depends only on this seam.
//! * [`GeminiClient`] — reqwest implementation authenticated by API key.
//! * [`SseDecoder`] / [`decode_events`] — server-sent-event framing.
//! * Wire types in [`types`].
//! * [`GeminiError`] — error variants for API calls.

pub mod client;
pub mod sse;
pub mod types;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{GeminiClient, GeminiError, GenerativeModel, ResponseStream};
pub use sse::{decode_events, SseDecoder};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, MultiSpeakerVoiceConfig, Part, PrebuiltVoiceConfig, SpeakerVoiceConfig,
    SpeechConfig, VoiceConfig,
};
