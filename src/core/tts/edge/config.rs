//! Configuration constants for the Edge TTS fallback engine.
//!
//! # Recommended Voices
//!
//! - `zh-CN-YunyangNeural` - professional broadcast tone (default)
//! - `zh-CN-XiaoxiaoNeural` - warm and natural
//! - `zh-CN-YunxiNeural` - bright and youthful

/// Environment variable overriding the synthesis voice (optional).
pub const EDGE_VOICE: &str = "EDGE_VOICE";

/// Voice used when `EDGE_VOICE` is unset.
pub const DEFAULT_VOICE: &str = "zh-CN-YunyangNeural";

/// Command-line tool performing the synthesis.
pub const EDGE_TTS_COMMAND: &str = "edge-tts";

/// Shown when the synthesis tool is not on PATH.
pub(super) const INSTALL_HINT: &str =
    "edge-tts not found on PATH. Install it with: pip install edge-tts";
