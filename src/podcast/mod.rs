//! Podcast catalogs and per-request speaker resolution.
//!
//! * [`voices`] — supported TTS voices, slot defaults and the name pool.
//! * [`tones`] — the six conversation tone presets.
//! * [`speakers`] — [`SpeakerResolver`] turning optional overrides into two
//!   distinct [`SpeakerConfig`]s.
//!
//! [`VoiceListing`], [`ToneListing`] and [`ServiceInfo`] are the read-only
//! views served without running the pipeline.

pub mod speakers;
pub mod tones;
pub mod voices;

use serde::Serialize;

pub use speakers::{NameShuffle, RandomShuffle, SpeakerConfig, SpeakerOverride, SpeakerResolver};
pub use tones::{default_tone, find_tone, resolve_tone, TonePreset, DEFAULT_TONE, TONE_PRESETS};
pub use voices::{DEFAULT_VOICE_1, DEFAULT_VOICE_2, SUPPORTED_VOICES};

/// Supported voices plus the default for each speaker slot.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceListing {
    pub voices: Vec<&'static str>,
    pub default_voice1: &'static str,
    pub default_voice2: &'static str,
}

impl VoiceListing {
    pub fn new() -> Self {
        Self {
            voices: SUPPORTED_VOICES.to_vec(),
            default_voice1: DEFAULT_VOICE_1,
            default_voice2: DEFAULT_VOICE_2,
        }
    }
}

impl Default for VoiceListing {
    fn default() -> Self {
        Self::new()
    }
}

/// Tone presets keyed by tone key, plus the default key.
#[derive(Debug, Clone, Serialize)]
pub struct ToneListing {
    pub tones: std::collections::BTreeMap<&'static str, TonePreset>,
    pub default: &'static str,
}

impl ToneListing {
    pub fn new() -> Self {
        Self {
            tones: TONE_PRESETS.iter().map(|t| (t.key, *t)).collect(),
            default: DEFAULT_TONE,
        }
    }
}

impl Default for ToneListing {
    fn default() -> Self {
        Self::new()
    }
}

/// Short description of the service and the models it is configured with.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub script_model: String,
    pub tts_model: String,
    pub features: [&'static str; 4],
}

impl ServiceInfo {
    pub fn new(config: &crate::config::GeminiConfig) -> Self {
        Self {
            message: "PDF to two-host podcast audio, scripted and voiced by Gemini",
            script_model: config.script_model.clone(),
            tts_model: config.tts_model.clone(),
            features: [
                "Multi-speaker conversational audio",
                "Six conversation tones",
                "Thirty prebuilt voices",
                "Streamed native TTS assembled into WAV",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_listing_json_shape() {
        let json = serde_json::to_value(VoiceListing::new()).unwrap();
        assert_eq!(json["voices"].as_array().unwrap().len(), SUPPORTED_VOICES.len());
        assert_eq!(json["default_voice1"], "Zephyr");
        assert_eq!(json["default_voice2"], "Puck");
    }

    #[test]
    fn tone_listing_hides_prompt_text() {
        let json = serde_json::to_value(ToneListing::new()).unwrap();
        assert_eq!(json["default"], "conversational");
        let debate = &json["tones"]["debate"];
        assert_eq!(debate["name"], "Debate");
        assert!(debate["description"].is_string());
        assert!(debate.get("prompt_addition").is_none());
    }

    #[test]
    fn service_info_reports_configured_models() {
        let mut config = crate::config::GeminiConfig::default();
        config.tts_model = "custom-tts".into();
        let json = serde_json::to_value(ServiceInfo::new(&config)).unwrap();
        assert_eq!(json["script_model"], "gemini-1.5-flash");
        assert_eq!(json["tts_model"], "custom-tts");
        assert_eq!(json["features"].as_array().unwrap().len(), 4);
    }
}
