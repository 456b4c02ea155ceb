//! Minimal RIFF/WAVE container for mono PCM.
//!
//! The TTS model streams headerless PCM.  [`wrap_pcm`] prefixes each chunk
//! with the canonical 44-byte header so every chunk is a self-describing
//! waveform.  All header integers are little-endian.
//!
//! ```text
//! offset  size  field
//!      0     4  "RIFF"
//!      4     4  chunk size (36 + data size)
//!      8     4  "WAVE"
//!     12     4  "fmt "
//!     16     4  16
//!     20     2  audio format (1 = PCM)
//!     22     2  channels (1)
//!     24     4  sample rate
//!     28     4  byte rate
//!     32     2  block align
//!     34     2  bits per sample
//!     36     4  "data"
//!     40     4  data size
//!     44     …  PCM payload
//! ```

use super::format::PcmFormat;

/// Length of the canonical header produced by [`create_header`].
pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const PCM_FORMAT_TAG: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;

/// MIME types that already denote the container format.
const WAV_MIME_TYPES: &[&str] = &["audio/wav", "audio/wave", "audio/x-wav"];

/// Build the 44-byte header for `data_size` bytes of mono PCM in `format`.
pub fn create_header(data_size: u32, format: PcmFormat) -> [u8; WAV_HEADER_LEN] {
    let block_align = CHANNELS * format.bytes_per_sample();
    // Out-of-range rates saturate instead of wrapping.
    let byte_rate = format.sample_rate.saturating_mul(u32::from(block_align));
    let chunk_size = 36u32.saturating_add(data_size);

    let mut header = [0u8; WAV_HEADER_LEN];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    header[20..22].copy_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Wrap raw PCM bytes into a complete single-channel waveform file.
///
/// # Example
///
/// ```rust
/// use pdf_to_podcast::audio::{wrap_pcm, PcmFormat, WAV_HEADER_LEN};
///
/// let pcm = vec![0u8; 480];
/// let wav = wrap_pcm(&pcm, PcmFormat::default());
/// assert_eq!(&wav[0..4], b"RIFF");
/// assert_eq!(&wav[WAV_HEADER_LEN..], &pcm[..]);
/// ```
pub fn wrap_pcm(pcm: &[u8], format: PcmFormat) -> Vec<u8> {
    // Sizes past u32::MAX cannot be expressed in RIFF; clamp the header field.
    let data_size = u32::try_from(pcm.len()).unwrap_or(u32::MAX);

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav.extend_from_slice(&create_header(data_size, format));
    wav.extend_from_slice(pcm);
    wav
}

/// Returns `true` when `mime_type` already names the waveform container,
/// ignoring parameters and case.
pub fn is_wav_mime(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    WAV_MIME_TYPES
        .iter()
        .any(|wav| essence.eq_ignore_ascii_case(wav))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn header_layout_for_default_format() {
        let header = create_header(1_000, PcmFormat::default());

        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(u32_at(&header, 4), 1_036);
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(u32_at(&header, 16), 16);
        assert_eq!(u16_at(&header, 20), 1);
        assert_eq!(u16_at(&header, 22), 1);
        assert_eq!(u32_at(&header, 24), 24_000);
        assert_eq!(u32_at(&header, 28), 48_000);
        assert_eq!(u16_at(&header, 32), 2);
        assert_eq!(u16_at(&header, 34), 16);
        assert_eq!(&header[36..40], b"data");
        assert_eq!(u32_at(&header, 40), 1_000);
    }

    #[test]
    fn derived_fields_follow_bit_depth() {
        let format = PcmFormat {
            bits_per_sample: 24,
            sample_rate: 48_000,
        };
        let header = create_header(0, format);

        assert_eq!(u16_at(&header, 32), 3, "block align");
        assert_eq!(u32_at(&header, 28), 144_000, "byte rate");
        assert_eq!(u16_at(&header, 34), 24);
    }

    #[test]
    fn extreme_rate_saturates_byte_rate() {
        let format = PcmFormat::parse("audio/L32;rate=2000000000");
        assert_eq!(format.sample_rate, 2_000_000_000);

        let wav = wrap_pcm(&[0u8; 8], format);
        assert_eq!(u32_at(&wav, 24), 2_000_000_000);
        assert_eq!(u32_at(&wav, 28), u32::MAX, "byte rate");
        assert_eq!(u16_at(&wav, 32), 4, "block align");
        assert_eq!(wav.len(), WAV_HEADER_LEN + 8);
    }

    #[test]
    fn sizes_track_payload_length() {
        for len in [0usize, 1, 2, 479, 4_800] {
            let pcm: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let wav = wrap_pcm(&pcm, PcmFormat::default());

            assert_eq!(wav.len(), WAV_HEADER_LEN + len);
            assert_eq!(u32_at(&wav, 4) as usize, 36 + len);
            assert_eq!(u32_at(&wav, 40) as usize, len);
            assert_eq!(&wav[WAV_HEADER_LEN..], &pcm[..], "payload must be untouched");
        }
    }

    #[test]
    fn wrapped_pcm_is_readable_by_hound() {
        let samples: Vec<i16> = (0..2_400).map(|i| ((i % 100) * 300 - 15_000) as i16).collect();
        let pcm: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

        let wav = wrap_pcm(&pcm, PcmFormat::default());
        let mut reader = hound::WavReader::new(std::io::Cursor::new(wav)).expect("valid wav");

        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24_000);
        assert_eq!(spec.bits_per_sample, 16);

        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn wav_mime_detection() {
        assert!(is_wav_mime("audio/wav"));
        assert!(is_wav_mime("audio/WAV"));
        assert!(is_wav_mime("audio/x-wav; charset=binary"));
        assert!(!is_wav_mime("audio/L16;rate=24000"));
        assert!(!is_wav_mime(""));
    }
}
