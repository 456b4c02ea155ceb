//! Prompt builder for two-speaker podcast scripts.
//!
//! [`PromptBuilder`] renders one flat instruction string from the extracted
//! document text, the two resolved speakers and a tone preset.  The layout
//! is fixed:
//!
//! ```text
//!   dialogue instruction (2-3 minutes, speaker names)
//!   per-speaker role hints
//!   Style: <tone prompt addition>
//!   formatting example  "<name>: [speech]"
//!   Document content: <truncated text>
//!   closing cue
//! ```

use std::borrow::Cow;

use crate::podcast::{resolve_tone, SpeakerConfig};

/// Appended to the document text when it is cut short.
const TRUNCATION_MARKER: &str = "...";

/// Default document budget, in characters.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 4_000;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the script-generation prompt.
///
/// # Example
/// ```rust
/// use pdf_to_podcast::llm::PromptBuilder;
/// use pdf_to_podcast::podcast::SpeakerConfig;
///
/// let alex = SpeakerConfig::new("Alex", "Zephyr");
/// let jordan = SpeakerConfig::new("Jordan", "Puck");
/// let prompt = PromptBuilder::default().build("Quarterly budget notes.", &alex, &jordan, None);
/// assert!(prompt.contains("between Alex and Jordan"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    max_document_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_CHARS)
    }
}

impl PromptBuilder {
    /// Create a builder that keeps at most `max_document_chars` characters
    /// of the document.
    pub fn new(max_document_chars: usize) -> Self {
        Self { max_document_chars }
    }

    /// Render the prompt.  Unknown or absent tone keys use the default tone.
    pub fn build(
        &self,
        document_text: &str,
        speaker1: &SpeakerConfig,
        speaker2: &SpeakerConfig,
        tone_key: Option<&str>,
    ) -> String {
        let tone = resolve_tone(tone_key);
        let text = truncate_document(document_text, self.max_document_chars);
        let (n1, n2) = (speaker1.name.as_str(), speaker2.name.as_str());

        let mut prompt = String::with_capacity(text.len() + 1024);
        prompt.push_str(&format!(
            "Create a 2-3 minute podcast conversation between {n1} and {n2} about this document. \
             Make it natural and engaging.\n\n"
        ));
        prompt.push_str(&format!(
            "{n1}: Curious, asks questions\n{n2}: Enthusiastic, explains clearly\n\n"
        ));
        prompt.push_str(&format!("Style: {}\n\n", tone.prompt_addition));
        prompt.push_str(&format!(
            "Keep it conversational with natural reactions. Format with speaker labels:\n\n\
             {n1}: [speech]\n{n2}: [speech]\n\n"
        ));
        prompt.push_str(&format!("Document content:\n{text}\n\n"));
        prompt.push_str("Start the conversation:");
        prompt
    }
}

/// Keep the first `max_chars` characters of `text`, appending `...` when
/// anything was cut.  Counts chars, not bytes.
pub fn truncate_document(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], TRUNCATION_MARKER)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
