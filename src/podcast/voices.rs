//! Prebuilt TTS voices and the speaker-name pool.

/// Prebuilt voice names accepted by the multi-speaker TTS model.
pub static SUPPORTED_VOICES: [&str; 30] = [
    "Zephyr",
    "Puck",
    "Charon",
    "Kore",
    "Fenrir",
    "Leda",
    "Orus",
    "Aoede",
    "Callirrhoe",
    "Autonoe",
    "Enceladus",
    "Iapetus",
    "Umbriel",
    "Algieba",
    "Despina",
    "Erinome",
    "Algenib",
    "Rasalgethi",
    "Laomedeia",
    "Achernar",
    "Alnilam",
    "Schedar",
    "Gacrux",
    "Pulcherrima",
    "Achird",
    "Zubenelgenubi",
    "Vindemiatrix",
    "Sadachbia",
    "Sadaltager",
    "Sulafat",
];

/// Default voice for speaker slot 1 (warm, analytical).
pub const DEFAULT_VOICE_1: &str = "Zephyr";

/// Default voice for speaker slot 2 (upbeat, explanatory).
pub const DEFAULT_VOICE_2: &str = "Puck";

/// Distinct candidate names used when a speaker name is not supplied.
pub static NAME_POOL: [&str; 16] = [
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Blake", "Sage",
    "Drew", "Parker", "Emery", "Rowan", "Finley", "Hayden",
];

/// Canonical spelling of `voice` if it is supported (case-insensitive).
///
/// ```rust
/// use pdf_to_podcast::podcast::voices::canonical_voice;
///
/// assert_eq!(canonical_voice("kore"), Some("Kore"));
/// assert_eq!(canonical_voice("Robot"), None);
/// ```
pub fn canonical_voice(voice: &str) -> Option<&'static str> {
    let voice = voice.trim();
    SUPPORTED_VOICES
        .iter()
        .copied()
        .find(|v| v.eq_ignore_ascii_case(voice))
}
