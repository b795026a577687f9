//! Configuration constants for the MiniMax TTS API.

/// Environment variable holding the MiniMax API key.
pub const MINIMAX_API_KEY: &str = "MINIMAX_API_KEY";

/// Environment variable holding the cloned voice identifier.
pub const MINIMAX_VOICE_ID: &str = "MINIMAX_VOICE_ID";

/// Fixed synthesis model.
pub const MINIMAX_MODEL: &str = "speech-02-hd";

/// Voice rendering defaults sent with every request.
pub(super) const DEFAULT_SPEED: f32 = 1.0;
pub(super) const DEFAULT_VOLUME: f32 = 1.0;
pub(super) const DEFAULT_PITCH: i32 = 0;

/// Output audio parameters: 32 kHz mono MP3 at 128 kbit/s.
pub(super) const SAMPLE_RATE: u32 = 32000;
pub(super) const BITRATE: u32 = 128000;
pub(super) const AUDIO_FORMAT: &str = "mp3";
pub(super) const CHANNELS: u32 = 1;
