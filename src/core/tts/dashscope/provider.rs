//! DashScope CosyVoice TTS engine implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://dashscope.aliyuncs.com/api/v1/services/aigc/text2audio/generate`
//! - Model: cosyvoice-v2 (fixed)
//! - Output: base64 audio at `output.audio`, or a download URL at
//!   `output.audio_url` that is fetched with a second request
//! - Errors: `message` field on the response body

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use super::config::{DASHSCOPE_API_KEY, DEFAULT_VOICE, QWEN_VOICE};
use super::messages::{SynthesisOutput, SynthesisRequest, SynthesisResponse};
use crate::config::ConfigSource;
use crate::core::tts::base::{TtsEngine, TtsError, TtsResult};

/// DashScope text2audio endpoint.
pub const DASHSCOPE_TTS_URL: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text2audio/generate";

/// DashScope CosyVoice engine.
#[derive(Debug)]
pub struct DashscopeTts {
    client: reqwest::Client,
    source: Arc<dyn ConfigSource>,
    endpoint: String,
}

impl DashscopeTts {
    /// Create an engine reading credentials from `source`.
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            source,
            endpoint: DASHSCOPE_TTS_URL.to_string(),
        }
    }

    /// Override the API endpoint (mock servers).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Download the clip an out-of-line response points at.
    async fn fetch_audio_url(&self, url: &str) -> TtsResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TtsError::ProviderError(format!(
                "audio download from {url} failed with {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TtsEngine for DashscopeTts {
    fn name(&self) -> &'static str {
        "dashscope"
    }

    /// Only the API key is required; the voice has a default.
    fn check_config(&self) -> Option<String> {
        if self.source.get(DASHSCOPE_API_KEY).is_none() {
            return Some(format!("Missing {DASHSCOPE_API_KEY}"));
        }
        None
    }

    async fn generate(&self, text: &str, output_path: &Path) -> TtsResult<()> {
        let api_key = self
            .source
            .get(DASHSCOPE_API_KEY)
            .ok_or_else(|| TtsError::ConfigurationError(format!("Missing {DASHSCOPE_API_KEY}")))?;
        let voice = self
            .source
            .get(QWEN_VOICE)
            .unwrap_or_else(|| DEFAULT_VOICE.to_string());

        let request = SynthesisRequest::new(text, voice);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .header("X-DashScope-Async", "disable")
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;
        let parsed: SynthesisResponse =
            serde_json::from_str(&body).map_err(|_| TtsError::ProviderError(body.clone()))?;

        let output = parsed.output.unwrap_or(SynthesisOutput {
            audio: None,
            audio_url: None,
        });

        let audio = if let Some(encoded) = output.audio.filter(|a| !a.is_empty()) {
            BASE64
                .decode(encoded.trim())
                .map_err(|e| TtsError::DecodeError(format!("invalid base64 audio payload: {e}")))?
        } else if let Some(url) = output.audio_url.filter(|u| !u.is_empty()) {
            debug!("DashScope returned an audio URL, fetching {url}");
            self.fetch_audio_url(&url).await?
        } else {
            // Prefer the provider's message field, fall back to the body
            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or(body);
            return Err(TtsError::ProviderError(message));
        };

        debug!("DashScope returned {} bytes of audio", audio.len());
        tokio::fs::write(output_path, &audio).await.map_err(|e| {
            TtsError::IoError(format!("failed to write {}: {e}", output_path.display()))
        })?;
        Ok(())
    }
}
