//! Request and response types for the MiniMax `t2a_v2` API.

use serde::{Deserialize, Serialize};

use super::config;

// =============================================================================
// Request Types
// =============================================================================

/// Synthesis request body.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: &'static str,
    pub text: String,
    pub stream: bool,
    pub voice_setting: VoiceSetting,
    pub audio_setting: AudioSetting,
}

/// Voice rendering parameters.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSetting {
    pub voice_id: String,
    pub speed: f32,
    pub vol: f32,
    pub pitch: i32,
}

/// Output encoding parameters.
#[derive(Debug, Clone, Serialize)]
pub struct AudioSetting {
    pub sample_rate: u32,
    pub bitrate: u32,
    pub format: &'static str,
    pub channel: u32,
}

impl SpeechRequest {
    /// Non-streaming `speech-02-hd` request with the fixed rendering defaults.
    pub fn new(text: &str, voice_id: String) -> Self {
        Self {
            model: config::MINIMAX_MODEL,
            text: text.to_string(),
            stream: false,
            voice_setting: VoiceSetting {
                voice_id,
                speed: config::DEFAULT_SPEED,
                vol: config::DEFAULT_VOLUME,
                pitch: config::DEFAULT_PITCH,
            },
            audio_setting: AudioSetting {
                sample_rate: config::SAMPLE_RATE,
                bitrate: config::BITRATE,
                format: config::AUDIO_FORMAT,
                channel: config::CHANNELS,
            },
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Synthesis response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechResponse {
    #[serde(default)]
    pub data: Option<SpeechData>,
    #[serde(default)]
    pub base_resp: Option<BaseResp>,
}

/// Payload container of a successful synthesis.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechData {
    /// Hex-encoded audio bytes.
    #[serde(default)]
    pub audio: Option<String>,
}

/// Status envelope carried on every MiniMax response.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseResp {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_fixed_model_and_settings() {
        let request = SpeechRequest::new("hello", "voice-1".to_string());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "speech-02-hd");
        assert_eq!(value["stream"], false);
        assert_eq!(value["voice_setting"]["voice_id"], "voice-1");
        assert_eq!(value["voice_setting"]["speed"], 1.0);
        assert_eq!(value["audio_setting"]["sample_rate"], 32000);
        assert_eq!(value["audio_setting"]["format"], "mp3");
        assert_eq!(value["audio_setting"]["channel"], 1);
    }

    #[test]
    fn success_response_deserializes_audio_field() {
        let body = r#"{"data":{"audio":"48656c6c6f"},"base_resp":{"status_code":0,"status_msg":"success"}}"#;
        let response: SpeechResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.data.unwrap().audio.unwrap(), "48656c6c6f");
        assert_eq!(response.base_resp.unwrap().status_code, Some(0));
    }

    #[test]
    fn error_response_deserializes_without_data() {
        let body = r#"{"base_resp":{"status_code":1004,"status_msg":"invalid api key"}}"#;
        let response: SpeechResponse = serde_json::from_str(body).unwrap();

        assert!(response.data.is_none());
        assert_eq!(
            response.base_resp.unwrap().status_msg.as_deref(),
            Some("invalid api key")
        );
    }
}
