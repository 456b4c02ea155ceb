//! Conversation tone presets.
//!
//! A tone is a short style instruction spliced into the script prompt.  The
//! catalog is a fixed table; unknown keys resolve to
//! [`DEFAULT_TONE`] (`"conversational"`).

use serde::Serialize;

/// Key of the tone used when none (or an unknown one) is requested.
pub const DEFAULT_TONE: &str = "conversational";

/// One entry of the tone catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonePreset {
    /// Lookup key (e.g. `"debate"`).
    pub key: &'static str,
    /// Human-readable name shown in listings.
    pub name: &'static str,
    /// One-line description shown in listings.
    pub description: &'static str,
    /// Instruction appended to the script prompt.
    #[serde(skip)]
    pub prompt_addition: &'static str,
}

/// All supported tone presets, default first.
pub static TONE_PRESETS: [TonePreset; 6] = [
    TonePreset {
        key: "conversational",
        name: "Conversational",
        description: "Friendly, natural back-and-forth between two curious hosts",
        prompt_addition: "Keep the tone warm and relaxed, like two friends chatting over coffee. \
Use natural reactions, light humour and everyday language.",
    },
    TonePreset {
        key: "educational",
        name: "Educational",
        description: "Clear teaching style that builds understanding step by step",
        prompt_addition: "Make it educational: introduce key terms, explain concepts step by step, \
use simple analogies and recap the most important points before closing.",
    },
    TonePreset {
        key: "analytical",
        name: "Analytical",
        description: "Deep dive into the data, reasoning and implications",
        prompt_addition: "Take an analytical angle: examine the evidence and numbers, question \
assumptions, compare alternatives and discuss the implications in depth.",
    },
    TonePreset {
        key: "debate",
        name: "Debate",
        description: "Two hosts with opposing viewpoints challenge each other",
        prompt_addition: "Frame it as a respectful debate: the hosts take opposing positions on the \
document's main claims, challenge each other with arguments and counterpoints, and \
acknowledge strong points before summarising where they still disagree.",
    },
    TonePreset {
        key: "interview",
        name: "Interview",
        description: "A host interviews an expert about the document",
        prompt_addition: "Structure it as an interview: the first speaker is the host asking \
focused, probing questions and the second speaker is the expert giving detailed, \
authoritative answers.",
    },
    TonePreset {
        key: "casual",
        name: "Casual",
        description: "Laid-back chat with humour and personal takes",
        prompt_addition: "Keep it very casual and upbeat: use informal language, jokes, personal \
opinions and tangents, while still covering the main ideas of the document.",
    },
];

/// Look up a tone by key (case-insensitive, surrounding whitespace ignored).
///
/// Missing or unrecognised keys fall back to [`DEFAULT_TONE`].
///
/// ```rust
/// use pdf_to_podcast::podcast::tones::{resolve_tone, DEFAULT_TONE};
///
/// assert_eq!(resolve_tone(Some("Debate")).key, "debate");
/// assert_eq!(resolve_tone(Some("opera")).key, DEFAULT_TONE);
/// assert_eq!(resolve_tone(None).key, DEFAULT_TONE);
/// ```
pub fn resolve_tone(key: Option<&str>) -> &'static TonePreset {
    key.map(str::trim)
        .and_then(find_tone)
        .unwrap_or_else(default_tone)
}

/// Exact catalog lookup without fallback.
pub fn find_tone(key: &str) -> Option<&'static TonePreset> {
    TONE_PRESETS
        .iter()
        .find(|tone| tone.key.eq_ignore_ascii_case(key))
}

/// The [`DEFAULT_TONE`] preset.
pub fn default_tone() -> &'static TonePreset {
    &TONE_PRESETS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_unique_keys() {
        let mut keys: Vec<_> = TONE_PRESETS.iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 6);
        for key in ["conversational", "educational", "analytical", "debate", "interview", "casual"] {
            assert!(find_tone(key).is_some(), "missing tone {key}");
        }
    }

    #[test]
    fn default_tone_is_conversational() {
        assert_eq!(default_tone().key, DEFAULT_TONE);
    }

    #[test]
    fn every_preset_has_prompt_text() {
        for tone in &TONE_PRESETS {
            assert!(!tone.name.is_empty());
            assert!(!tone.description.is_empty());
            assert!(!tone.prompt_addition.is_empty());
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(resolve_tone(Some("  INTERVIEW ")).key, "interview");
    }

    #[test]
    fn empty_and_unknown_keys_fall_back() {
        assert_eq!(resolve_tone(Some("")).key, DEFAULT_TONE);
        assert_eq!(resolve_tone(Some("recursive")).key, DEFAULT_TONE);
        assert_eq!(resolve_tone(None).key, DEFAULT_TONE);
    }
}
