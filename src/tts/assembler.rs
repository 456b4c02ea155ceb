//! Accumulates streamed TTS responses into one waveform buffer.
//!
//! ```text
//!   stream item ──► parts of first candidate
//!                     ├─ inlineData audio/wav   ─► append as-is
//!                     ├─ inlineData audio/L16;… ─► parse format ─► wrap_pcm ─► append
//!                     └─ text                   ─► log only
//!   end of stream ──► ≥1 chunk → bytes    0 chunks → NoAudio
//! ```
//!
//! Chunks are appended in arrival order and never reordered.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use futures::{Stream, StreamExt};

use crate::audio::{is_wav_mime, wrap_pcm, PcmFormat};
use crate::gemini::{GeminiError, GenerateContentResponse, InlineData};

use super::SynthesisError;

// ---------------------------------------------------------------------------
// AudioAssembler
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AudioAssembler {
    buf: Vec<u8>,
    chunks: usize,
    text_items: usize,
    first_format: Option<PcmFormat>,
}

impl AudioAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio chunks appended so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    /// Fold one streamed response into the buffer.  Items with no
    /// candidate, content or parts are skipped.
    pub fn push_response(&mut self, response: &GenerateContentResponse) -> Result<(), SynthesisError> {
        let Some(parts) = response.parts() else {
            log::debug!("tts: skipping stream item without content");
            return Ok(());
        };

        for part in parts {
            if let Some(inline) = &part.inline_data {
                self.push_inline(inline)?;
            } else if let Some(text) = part.text.as_deref().filter(|t| !t.trim().is_empty()) {
                self.text_items += 1;
                log::debug!("tts: text from speech model: {}", text.trim());
            }
        }
        Ok(())
    }

    fn push_inline(&mut self, inline: &InlineData) -> Result<(), SynthesisError> {
        let bytes = BASE64
            .decode(inline.data.trim())
            .map_err(|e| SynthesisError::Decode(e.to_string()))?;
        if bytes.is_empty() {
            log::debug!("tts: skipping empty {} chunk", inline.mime_type);
            return Ok(());
        }

        if is_wav_mime(&inline.mime_type) {
            self.buf.extend_from_slice(&bytes);
        } else {
            let format = PcmFormat::parse(&inline.mime_type);
            match self.first_format {
                None => self.first_format = Some(format),
                Some(first) if first != format => log::warn!(
                    "tts: chunk {} format {:?} differs from first chunk {:?}; concatenating anyway",
                    self.chunks + 1,
                    format,
                    first
                ),
                Some(_) => {}
            }
            self.buf.extend_from_slice(&wrap_pcm(&bytes, format));
        }

        self.chunks += 1;
        log::debug!(
            "tts: chunk {} ({}, {} bytes)",
            self.chunks,
            inline.mime_type,
            bytes.len()
        );
        Ok(())
    }

    /// Final buffer, or [`SynthesisError::NoAudio`] when nothing was appended.
    pub fn finish(self) -> Result<Vec<u8>, SynthesisError> {
        if self.chunks == 0 {
            log::warn!(
                "tts: stream ended without audio ({} text items)",
                self.text_items
            );
            return Err(SynthesisError::NoAudio);
        }
        log::info!("tts: assembled {} chunks, {} bytes", self.chunks, self.buf.len());
        Ok(self.buf)
    }
}

// ---------------------------------------------------------------------------
// collect_audio
// ---------------------------------------------------------------------------

/// Drain `stream` eagerly into one buffer.  The first upstream error aborts.
pub async fn collect_audio<S>(mut stream: S) -> Result<Vec<u8>, SynthesisError>
where
    S: Stream<Item = Result<GenerateContentResponse, GeminiError>> + Unpin,
{
    let mut assembler = AudioAssembler::new();
    while let Some(item) = stream.next().await {
        assembler.push_response(&item?)?;
    }
    assembler.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
