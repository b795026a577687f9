//! MiniMax TTS engine implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.minimax.io/v1/t2a_v2`
//! - Model: speech-02-hd (fixed)
//! - Output: hex-encoded MP3 at `data.audio`, 32 kHz mono, 128 kbit/s
//! - Errors: `base_resp.status_msg` on a 200 response

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::config::{MINIMAX_API_KEY, MINIMAX_VOICE_ID};
use super::messages::{SpeechRequest, SpeechResponse};
use crate::config::ConfigSource;
use crate::core::tts::base::{TtsEngine, TtsError, TtsResult};

/// MiniMax TTS API endpoint (international).
pub const MINIMAX_TTS_URL: &str = "https://api.minimax.io/v1/t2a_v2";

/// MiniMax TTS API endpoint (China mainland).
pub const MINIMAX_TTS_URL_CN: &str = "https://api.minimaxi.com/v1/t2a_v2";

/// MiniMax `t2a_v2` engine.
#[derive(Debug)]
pub struct MinimaxTts {
    client: reqwest::Client,
    source: Arc<dyn ConfigSource>,
    endpoint: String,
}

impl MinimaxTts {
    /// Create an engine reading credentials from `source`.
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            source,
            endpoint: MINIMAX_TTS_URL.to_string(),
        }
    }

    /// Override the API endpoint (regional deployments, mock servers).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

#[async_trait]
impl TtsEngine for MinimaxTts {
    fn name(&self) -> &'static str {
        "minimax"
    }

    /// API key first, voice id second.
    fn check_config(&self) -> Option<String> {
        if self.source.get(MINIMAX_API_KEY).is_none() {
            return Some(format!("Missing {MINIMAX_API_KEY}"));
        }
        if self.source.get(MINIMAX_VOICE_ID).is_none() {
            return Some(format!("Missing {MINIMAX_VOICE_ID}"));
        }
        None
    }

    async fn generate(&self, text: &str, output_path: &Path) -> TtsResult<()> {
        let api_key = self
            .source
            .get(MINIMAX_API_KEY)
            .ok_or_else(|| TtsError::ConfigurationError(format!("Missing {MINIMAX_API_KEY}")))?;
        let voice_id = self
            .source
            .get(MINIMAX_VOICE_ID)
            .ok_or_else(|| TtsError::ConfigurationError(format!("Missing {MINIMAX_VOICE_ID}")))?;

        let request = SpeechRequest::new(text, voice_id);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;
        let parsed: SpeechResponse =
            serde_json::from_str(&body).map_err(|_| TtsError::ProviderError(body.clone()))?;

        let audio_hex = match parsed.data.and_then(|d| d.audio).filter(|a| !a.is_empty()) {
            Some(audio) => audio,
            None => {
                // Prefer the provider's status message, fall back to the body
                let message = parsed
                    .base_resp
                    .and_then(|r| r.status_msg)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(body);
                return Err(TtsError::ProviderError(message));
            }
        };

        let audio = hex::decode(audio_hex.trim())
            .map_err(|e| TtsError::DecodeError(format!("invalid hex audio payload: {e}")))?;
        debug!("MiniMax returned {} bytes of audio", audio.len());

        tokio::fs::write(output_path, &audio).await.map_err(|e| {
            TtsError::IoError(format!("failed to write {}: {e}", output_path.display()))
        })?;
        Ok(())
    }
}
