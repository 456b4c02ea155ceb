//! PCM stream parameters parsed from an audio MIME descriptor.
//!
//! The TTS model reports raw PCM chunks with descriptors such as
//! `audio/L16;codec=pcm;rate=24000`.  [`PcmFormat::parse`] pulls the bit depth
//! out of the `audio/L<bits>` type tag and the sample rate out of the `rate=`
//! parameter.  Anything missing or malformed keeps its default, so parsing
//! never fails.
//!
//! # Example
//!
//! ```rust
//! use pdf_to_podcast::audio::PcmFormat;
//!
//! let format = PcmFormat::parse("audio/L24;rate=48000");
//! assert_eq!(format.bits_per_sample, 24);
//! assert_eq!(format.sample_rate, 48_000);
//!
//! // Unparseable rate keeps the 24 kHz default.
//! let format = PcmFormat::parse("audio/L16;rate=fast");
//! assert_eq!(format.sample_rate, 24_000);
//! ```

/// Bit depth assumed when the descriptor carries no `audio/L<bits>` tag.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Sample rate assumed when the descriptor carries no usable `rate=` value.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

// ---------------------------------------------------------------------------
// PcmFormat
// ---------------------------------------------------------------------------

/// Sample layout of a raw mono PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Bits per sample (16 for `audio/L16`).
    pub bits_per_sample: u16,
    /// Samples per second.
    pub sample_rate: u32,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl PcmFormat {
    /// Parse a semicolon-separated MIME descriptor.
    ///
    /// * `rate=<int>` (key matched case-insensitively) sets `sample_rate`.
    /// * `audio/L<int>` sets `bits_per_sample`.
    /// * Zero, negative, non-numeric or overflowing values are ignored.
    /// * Unknown parameters are ignored.
    pub fn parse(descriptor: &str) -> Self {
        let mut format = Self::default();

        for param in descriptor.split(';') {
            let param = param.trim();
            let lower = param.to_ascii_lowercase();

            if let Some(rate) = lower.strip_prefix("rate=") {
                if let Some(rate) = parse_positive::<u32>(rate) {
                    format.sample_rate = rate;
                }
            } else if let Some(bits) = lower.strip_prefix("audio/l") {
                if let Some(bits) = parse_positive::<u16>(bits) {
                    format.bits_per_sample = bits;
                }
            }
        }

        format
    }

    /// Bytes occupied by one sample.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }
}

fn parse_positive<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|v| *v != T::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
