//! Request and response types for the DashScope `text2audio` API.

use serde::{Deserialize, Serialize};

use super::config;

// =============================================================================
// Request Types
// =============================================================================

/// Synthesis request body.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub model: &'static str,
    pub input: SynthesisInput,
    pub parameters: SynthesisParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisParameters {
    pub voice: String,
}

impl SynthesisRequest {
    /// `cosyvoice-v2` request for `text` with the given preset voice.
    pub fn new(text: &str, voice: String) -> Self {
        Self {
            model: config::DASHSCOPE_MODEL,
            input: SynthesisInput {
                text: text.to_string(),
            },
            parameters: SynthesisParameters { voice },
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Synthesis response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResponse {
    #[serde(default)]
    pub output: Option<SynthesisOutput>,
    /// Error description on failed requests.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Payload container of a successful synthesis.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisOutput {
    /// Base64-encoded audio bytes, when returned inline.
    #[serde(default)]
    pub audio: Option<String>,
    /// Download URL for the rendered clip, when returned out of line.
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_model_voice_and_text() {
        let request = SynthesisRequest::new("hello", "longfei".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "cosyvoice-v2");
        assert_eq!(value["input"]["text"], "hello");
        assert_eq!(value["parameters"]["voice"], "longfei");
    }

    #[test]
    fn inline_audio_response_deserializes() {
        let body = r#"{"output":{"audio":"SGVsbG8="}}"#;
        let response: SynthesisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.output.unwrap().audio.as_deref(), Some("SGVsbG8="));
    }

    #[test]
    fn audio_url_response_deserializes() {
        let body = r#"{"output":{"audio_url":"https://example.com/clip.mp3"}}"#;
        let response: SynthesisResponse = serde_json::from_str(body).unwrap();
        let output = response.output.unwrap();
        assert!(output.audio.is_none());
        assert_eq!(output.audio_url.as_deref(), Some("https://example.com/clip.mp3"));
    }

    #[test]
    fn error_response_deserializes_message_and_code() {
        let body = r#"{"code":"InvalidApiKey","message":"Invalid API-key provided."}"#;
        let response: SynthesisResponse = serde_json::from_str(body).unwrap();
        assert!(response.output.is_none());
        assert_eq!(response.code.as_deref(), Some("InvalidApiKey"));
        assert_eq!(response.message.as_deref(), Some("Invalid API-key provided."));
    }
}
