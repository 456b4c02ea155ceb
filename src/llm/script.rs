//! `ScriptWriter` — turns a prompt into a two-speaker dialogue script with
//! one non-streaming `generateContent` call.

use std::sync::Arc;
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::gemini::{GeminiError, GenerateContentRequest, GenerationConfig, GenerativeModel};

/// Calls a text model and returns its reply as the dialogue script.
///
/// No retry: any upstream failure, or a reply without text, is returned to
/// the caller as an error.
pub struct ScriptWriter {
    model: Arc<dyn GenerativeModel>,
    model_name: String,
    temperature: f32,
}

impl ScriptWriter {
    pub fn new(model: Arc<dyn GenerativeModel>, model_name: impl Into<String>, temperature: f32) -> Self {
        Self {
            model,
            model_name: model_name.into(),
            temperature,
        }
    }

    /// Use `config.script_model` and `config.temperature`.
    pub fn from_config(model: Arc<dyn GenerativeModel>, config: &GeminiConfig) -> Self {
        Self::new(model, config.script_model.clone(), config.temperature)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Generate the script for `prompt`.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::user_text(
            prompt,
            GenerationConfig {
                temperature: Some(self.temperature),
                ..Default::default()
            },
        );

        log::info!(
            "script: requesting dialogue from {} (prompt {} chars)",
            self.model_name,
            prompt.chars().count()
        );
        let t0 = Instant::now();

        let response = self.model.generate_content(&self.model_name, &request).await?;

        let script = response
            .text()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(GeminiError::EmptyResponse)?;

        log::info!(
            "script: generated {} chars in {}ms",
            script.chars().count(),
            t0.elapsed().as_millis()
        );
        Ok(script)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
