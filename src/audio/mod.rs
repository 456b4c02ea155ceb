//! Audio assembly — PCM descriptor parsing and waveform container encoding.
//!
//! # Pipeline
//!
//! ```text
//! TTS chunk (mime, bytes) ─┬─ audio/wav ───────────────────────────▶ as-is
//!                          └─ audio/L16;rate=… → PcmFormat::parse
//!                                               → wrap_pcm ────────▶ wav bytes
//! ```

pub mod format;
pub mod wav;

pub use format::{PcmFormat, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE};
pub use wav::{create_header, is_wav_mime, wrap_pcm, WAV_HEADER_LEN};
