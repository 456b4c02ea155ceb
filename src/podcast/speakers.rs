//! Speaker resolution — two distinct named speakers, each bound to a voice.
//!
//! [`SpeakerResolver`] fills in whatever the caller left out:
//!
//! * **Names** come from [`NAME_POOL`] in an order chosen by a
//!   [`NameShuffle`].  The two resolved names never compare equal
//!   (case-insensitively); a duplicate second name is replaced.
//! * **Voices** must be in [`SUPPORTED_VOICES`](super::voices::SUPPORTED_VOICES);
//!   anything else becomes the slot default ([`DEFAULT_VOICE_1`] /
//!   [`DEFAULT_VOICE_2`]).
//!
//! Randomness lives behind [`NameShuffle`] so tests can pin the order.

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::Serialize;

use super::voices::{canonical_voice, DEFAULT_VOICE_1, DEFAULT_VOICE_2, NAME_POOL};

// ---------------------------------------------------------------------------
// Speaker types
// ---------------------------------------------------------------------------

/// A resolved speaker: the label used in the script and its TTS voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerConfig {
    pub name: String,
    pub voice: String,
}

impl SpeakerConfig {
    pub fn new(name: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice: voice.into(),
        }
    }
}

/// Caller-supplied preferences for one speaker slot.  Blank strings count as
/// unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerOverride {
    pub name: Option<String>,
    pub voice: Option<String>,
}

impl SpeakerOverride {
    pub fn new(name: Option<&str>, voice: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            voice: voice.map(str::to_string),
        }
    }
}

// ---------------------------------------------------------------------------
// NameShuffle
// ---------------------------------------------------------------------------

/// Orders the candidate name pool before unset names are drawn from it.
pub trait NameShuffle: Send + Sync {
    fn shuffle(&self, names: &mut [&'static str]);
}

/// Production shuffle backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffle;

impl NameShuffle for RandomShuffle {
    fn shuffle(&self, names: &mut [&'static str]) {
        names.shuffle(&mut rand::rng());
    }
}

// ---------------------------------------------------------------------------
// SpeakerResolver
// ---------------------------------------------------------------------------

/// Resolves the two speaker slots for one conversion request.
#[derive(Clone)]
pub struct SpeakerResolver {
    shuffle: Arc<dyn NameShuffle>,
}

impl Default for SpeakerResolver {
    fn default() -> Self {
        Self::new(Arc::new(RandomShuffle))
    }
}

impl SpeakerResolver {
    pub fn new(shuffle: Arc<dyn NameShuffle>) -> Self {
        Self { shuffle }
    }

    /// Resolve both slots.  Never fails.
    ///
    /// ```rust
    /// use pdf_to_podcast::podcast::{SpeakerOverride, SpeakerResolver};
    ///
    /// let resolver = SpeakerResolver::default();
    /// let (one, two) = resolver.resolve(
    ///     &SpeakerOverride::new(Some("Sam"), Some("kore")),
    ///     &SpeakerOverride::new(Some("Sam"), Some("not-a-voice")),
    /// );
    /// assert_eq!(one.name, "Sam");
    /// assert_eq!(one.voice, "Kore");
    /// assert_ne!(two.name, "Sam");
    /// assert_eq!(two.voice, "Puck");
    /// ```
    pub fn resolve(
        &self,
        speaker1: &SpeakerOverride,
        speaker2: &SpeakerOverride,
    ) -> (SpeakerConfig, SpeakerConfig) {
        let mut pool = NAME_POOL;
        self.shuffle.shuffle(&mut pool);

        let wanted1 = non_blank(speaker1.name.as_deref());
        let wanted2 = non_blank(speaker2.name.as_deref());

        let name1 = match wanted1 {
            Some(name) => name.to_string(),
            None => pick_name(&pool, wanted2).to_string(),
        };
        let name2 = match wanted2 {
            Some(name) if !name.eq_ignore_ascii_case(&name1) => name.to_string(),
            Some(name) => {
                log::debug!("speakers: second name {name:?} duplicates the first, replacing");
                pick_name(&pool, Some(&name1)).to_string()
            }
            None => pick_name(&pool, Some(&name1)).to_string(),
        };

        let voice1 = resolve_voice(speaker1.voice.as_deref(), DEFAULT_VOICE_1);
        let voice2 = resolve_voice(speaker2.voice.as_deref(), DEFAULT_VOICE_2);

        (
            SpeakerConfig { name: name1, voice: voice1.to_string() },
            SpeakerConfig { name: name2, voice: voice2.to_string() },
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First pool entry that differs from `exclude`.  The pool holds more than
/// one distinct name, so a match always exists.
fn pick_name(pool: &[&'static str], exclude: Option<&str>) -> &'static str {
    pool.iter()
        .copied()
        .find(|candidate| exclude.map_or(true, |ex| !candidate.eq_ignore_ascii_case(ex)))
        .unwrap_or(NAME_POOL[0])
}

fn resolve_voice(requested: Option<&str>, slot_default: &'static str) -> &'static str {
    match non_blank(requested) {
        Some(voice) => canonical_voice(voice).unwrap_or_else(|| {
            log::warn!("speakers: unsupported voice {voice:?}, using {slot_default}");
            slot_default
        }),
        None => slot_default,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
