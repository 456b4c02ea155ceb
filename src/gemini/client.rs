//! `GenerativeModel` trait and the `GeminiClient` REST implementation.
//!
//! ```text
//!   POST {base_url}/v1beta/models/{model}:generateContent?key=…
//!        → one JSON GenerateContentResponse
//!
//!   POST {base_url}/v1beta/models/{model}:streamGenerateContent?alt=sse&key=…
//!        → text/event-stream, one GenerateContentResponse per `data:` event
//! ```
//!
//! All connection details come from [`GeminiConfig`].

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use thiserror::Error;

use crate::config::GeminiConfig;
use crate::gemini::sse::decode_events;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};

/// Longest upstream error body kept in [`GeminiError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 500;

// ---------------------------------------------------------------------------
// GeminiError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key in config or environment.
    #[error("no Gemini API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("Gemini request timed out")]
    Timeout,

    /// The API answered with a non-success status.
    #[error("Gemini returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be parsed as expected JSON.
    #[error("failed to parse Gemini response: {0}")]
    Parse(String),

    /// The response carried no usable content.
    #[error("Gemini returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else if e.is_decode() {
            GeminiError::Parse(e.to_string())
        } else {
            GeminiError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// GenerativeModel trait
// ---------------------------------------------------------------------------

/// Stream of partial responses from `streamGenerateContent`.
pub type ResponseStream = BoxStream<'static, Result<GenerateContentResponse, GeminiError>>;

/// Async access to a generative model endpoint.
///
/// Implementors must be `Send + Sync` so one client can be shared by the
/// script and speech stages (`Arc<dyn GenerativeModel>`).
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// One request, one complete response.
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError>;

    /// One request, a stream of partial responses.
    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<ResponseStream, GeminiError>;
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Calls the Gemini REST API with an API key.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from config.
    ///
    /// Fails with [`GeminiError::MissingApiKey`] when no non-empty key is
    /// configured.  The HTTP client carries `config.timeout_secs` as its
    /// per-request timeout.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GeminiError::MissingApiKey)?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post(
        &self,
        url: &str,
        query: &[(&str, &str)],
        request: &GenerateContentRequest,
    ) -> Result<reqwest::Response, GeminiError> {
        let response = self
            .client
            .post(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GeminiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pull `error.message` out of a Google API error body, else the raw body.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    if let Some(message) = parsed
        .as_ref()
        .and_then(|v| v["error"]["message"].as_str())
    {
        return message.to_string();
    }
    body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint(model, "generateContent");
        log::debug!("gemini: POST {}", url);

        let response = self.post(&url, &[], request).await?;
        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed)
    }

    async fn stream_generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<ResponseStream, GeminiError> {
        let url = self.endpoint(model, "streamGenerateContent");
        log::debug!("gemini: POST {} (sse)", url);

        let response = self.post(&url, &[("alt", "sse")], request).await?;
        let bytes = Box::pin(response.bytes_stream());

        Ok(decode_events(bytes).map(parse_event).boxed())
    }
}

fn parse_event(
    event: Result<String, reqwest::Error>,
) -> Result<GenerateContentResponse, GeminiError> {
    let data = event?;
    serde_json::from_str(&data).map_err(|e| GeminiError::Parse(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
