//! PDF-to-Podcast — turns a PDF into a two-host spoken audio overview.
//!
//! ```text
//! PDF bytes ─▶ document ─▶ llm (prompt + script) ─▶ tts (streamed speech) ─▶ audio (WAV) ─▶ file
//!                              └──────── gemini REST client ────────┘
//! ```

pub mod audio;
pub mod config;
pub mod document;
pub mod gemini;
pub mod llm;
pub mod pipeline;
pub mod podcast;
pub mod tts;
