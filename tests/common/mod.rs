//! Shared fixtures for integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::json;

use pdf_to_podcast::document::test_pdf;

/// Two-page report mentioning "budget" five times.
pub fn budget_pdf() -> Vec<u8> {
    test_pdf::budget_report()
}

/// JSON body of a non-streamed text reply.
pub fn text_reply(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// One SSE event carrying inline audio.
pub fn audio_event(mime: &str, bytes: &[u8]) -> String {
    let item = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "inlineData": { "mimeType": mime, "data": BASE64.encode(bytes) } }]
            }
        }]
    });
    format!("data: {item}\r\n\r\n")
}

/// One SSE event carrying only text.
pub fn text_event(text: &str) -> String {
    let item = json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    });
    format!("data: {item}\r\n\r\n")
}
