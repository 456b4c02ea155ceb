//! `SpeechSynthesizer` — reads a dialogue script aloud with two prebuilt
//! voices through one streaming multi-speaker TTS request.

use std::sync::Arc;
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::gemini::{
    GenerateContentRequest, GenerationConfig, GenerativeModel, MultiSpeakerVoiceConfig,
    SpeakerVoiceConfig, SpeechConfig,
};
use crate::podcast::SpeakerConfig;

use super::assembler::collect_audio;
use super::SynthesisError;

const AUDIO_MODALITY: &str = "AUDIO";

pub struct SpeechSynthesizer {
    model: Arc<dyn GenerativeModel>,
    model_name: String,
    temperature: f32,
}

impl SpeechSynthesizer {
    pub fn new(model: Arc<dyn GenerativeModel>, model_name: impl Into<String>, temperature: f32) -> Self {
        Self {
            model,
            model_name: model_name.into(),
            temperature,
        }
    }

    /// Use `config.tts_model` and `config.temperature`.
    pub fn from_config(model: Arc<dyn GenerativeModel>, config: &GeminiConfig) -> Self {
        Self::new(model, config.tts_model.clone(), config.temperature)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Request body binding each speaker name to its voice.
    pub fn build_request(
        &self,
        script: &str,
        speaker1: &SpeakerConfig,
        speaker2: &SpeakerConfig,
    ) -> GenerateContentRequest {
        let text = format!(
            "Read this conversational script aloud with the specified speakers:\n\n{script}"
        );
        GenerateContentRequest::user_text(
            text,
            GenerationConfig {
                temperature: Some(self.temperature),
                response_modalities: Some(vec![AUDIO_MODALITY.to_string()]),
                speech_config: Some(SpeechConfig {
                    multi_speaker_voice_config: MultiSpeakerVoiceConfig {
                        speaker_voice_configs: vec![
                            SpeakerVoiceConfig::prebuilt(&speaker1.name, &speaker1.voice),
                            SpeakerVoiceConfig::prebuilt(&speaker2.name, &speaker2.voice),
                        ],
                    },
                }),
            },
        )
    }

    /// Stream the speech and return the assembled waveform bytes.
    pub async fn synthesize(
        &self,
        script: &str,
        speaker1: &SpeakerConfig,
        speaker2: &SpeakerConfig,
    ) -> Result<Vec<u8>, SynthesisError> {
        let request = self.build_request(script, speaker1, speaker2);

        log::info!(
            "tts: synthesising {} chars with {} ({}={}, {}={})",
            script.chars().count(),
            self.model_name,
            speaker1.name,
            speaker1.voice,
            speaker2.name,
            speaker2.voice
        );
        let t0 = Instant::now();

        let stream = self
            .model
            .stream_generate_content(&self.model_name, &request)
            .await?;
        let audio = collect_audio(stream).await?;

        log::info!(
            "tts: {} bytes of audio in {}ms",
            audio.len(),
            t0.elapsed().as_millis()
        );
        Ok(audio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{wrap_pcm, PcmFormat};
    use crate::gemini::{GeminiError, GenerateContentResponse, Part, ResponseStream};
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use futures::{stream, StreamExt};
    use std::sync::Mutex;

    /// Streams a fixed list of items and records the request it was sent.
    struct StreamingModel {
        items: Mutex<Option<Vec<Result<GenerateContentResponse, GeminiError>>>>,
        seen: Mutex<Option<(String, GenerateContentRequest)>>,
    }

    impl StreamingModel {
        fn new(items: Vec<Result<GenerateContentResponse, GeminiError>>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(Some(items)),
                seen: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerativeModel for StreamingModel {
        async fn generate_content(
            &self,
            _model: &str,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GeminiError> {
            unreachable!("speech synthesis always streams")
        }

        async fn stream_generate_content(
            &self,
            model: &str,
            request: &GenerateContentRequest,
        ) -> Result<ResponseStream, GeminiError> {
            *self.seen.lock().unwrap() = Some((model.to_string(), request.clone()));
            let items = self.items.lock().unwrap().take().unwrap_or_default();
            Ok(stream::iter(items).boxed())
        }
    }

    /// Refuses to open the stream at all.
    struct Unreachable;

    #[async_trait]
    impl GenerativeModel for Unreachable {
        async fn generate_content(
            &self,
            _model: &str,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GeminiError> {
            Err(GeminiError::Request("connection refused".into()))
        }

        async fn stream_generate_content(
            &self,
            _model: &str,
            _request: &GenerateContentRequest,
        ) -> Result<ResponseStream, GeminiError> {
            Err(GeminiError::Request("connection refused".into()))
        }
    }

    fn speakers() -> (SpeakerConfig, SpeakerConfig) {
        (
            SpeakerConfig::new("Alex", "Zephyr"),
            SpeakerConfig::new("Jordan", "Puck"),
        )
    }

    #[test]
    fn request_binds_speakers_to_voices() {
        let synth = SpeechSynthesizer::new(StreamingModel::new(vec![]), "tts", 0.8);
        let (a, b) = speakers();
        let request = synth.build_request("Alex: Hi\nJordan: Hey", &a, &b);

        let text = request.contents[0].parts.as_ref().unwrap()[0].text.clone().unwrap();
        assert_eq!(
            text,
            "Read this conversational script aloud with the specified speakers:\n\nAlex: Hi\nJordan: Hey"
        );

        let config = request.generation_config.unwrap();
        assert_eq!(config.temperature, Some(0.8));
        assert_eq!(config.response_modalities, Some(vec!["AUDIO".to_string()]));
        let voices = config
            .speech_config
            .unwrap()
            .multi_speaker_voice_config
            .speaker_voice_configs;
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0], SpeakerVoiceConfig::prebuilt("Alex", "Zephyr"));
        assert_eq!(voices[1], SpeakerVoiceConfig::prebuilt("Jordan", "Puck"));
    }

    #[tokio::test]
    async fn synthesize_streams_from_tts_model() {
        let pcm = [1u8, 0, 2, 0];
        let model = StreamingModel::new(vec![
            Ok(GenerateContentResponse::from_parts(vec![Part::inline(
                "audio/L16;codec=pcm;rate=24000",
                BASE64.encode(pcm),
            )])),
            Ok(GenerateContentResponse::from_parts(vec![Part::text("done")])),
        ]);
        let synth = SpeechSynthesizer::from_config(model.clone(), &GeminiConfig::default());
        let (a, b) = speakers();

        let audio = synth.synthesize("Alex: Hi", &a, &b).await.unwrap();
        assert_eq!(audio, wrap_pcm(&pcm, PcmFormat::default()));

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.as_ref().unwrap().0, "gemini-2.5-pro-preview-tts");
    }

    #[tokio::test]
    async fn failure_to_open_stream_is_upstream_error() {
        let synth = SpeechSynthesizer::new(Arc::new(Unreachable), "tts", 0.8);
        let (a, b) = speakers();
        let err = synth.synthesize("x", &a, &b).await.unwrap_err();
        assert!(matches!(err, SynthesisError::Upstream(GeminiError::Request(_))));
    }

    #[tokio::test]
    async fn text_only_stream_is_no_audio() {
        let model = StreamingModel::new(vec![Ok(GenerateContentResponse::from_parts(vec![
            Part::text("no audio here"),
        ]))]);
        let synth = SpeechSynthesizer::new(model, "tts", 0.8);
        let (a, b) = speakers();
        let err = synth.synthesize("x", &a, &b).await.unwrap_err();
        assert!(matches!(err, SynthesisError::NoAudio));
    }
}
