//! Pipeline stages reported while a conversion runs.
//!
//! ```text
//! Validating ──▶ Extracting ──▶ Scripting ──▶ Synthesizing ──▶ Saving ──▶ Done
//!      └──────────────┴─────────────┴──────────────┴─────────────┴──▶ Failed
//! ```
//!
//! Each run publishes its transitions over an optional
//! `tokio::sync::mpsc::UnboundedSender<PipelineStage>`; a front end can show
//! them as a progress indicator.

/// Stages of one PDF → podcast conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Checking the file name.
    Validating,

    /// Pulling text out of the document on the blocking thread pool.
    Extracting,

    /// Waiting for the text model to write the dialogue script.
    Scripting,

    /// Streaming speech from the TTS model.
    Synthesizing,

    /// Writing the assembled waveform to disk.
    Saving,

    /// The audio file is ready.
    Done,

    /// The run stopped with an error.
    Failed,
}

impl PipelineStage {
    /// A short human-readable label for a status line.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Validating => "Checking file",
            PipelineStage::Extracting => "Extracting text from PDF",
            PipelineStage::Scripting => "Writing podcast script",
            PipelineStage::Synthesizing => "Generating audio",
            PipelineStage::Saving => "Saving audio",
            PipelineStage::Done => "Done",
            PipelineStage::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const WORKING: [PipelineStage; 5] = [
        PipelineStage::Validating,
        PipelineStage::Extracting,
        PipelineStage::Scripting,
        PipelineStage::Synthesizing,
        PipelineStage::Saving,
    ];

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = WORKING.iter().map(|s| s.label()).collect();
        labels.push(PipelineStage::Done.label());
        labels.push(PipelineStage::Failed.label());
        let count = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(PipelineStage::Synthesizing.to_string(), "Generating audio");
    }
}
