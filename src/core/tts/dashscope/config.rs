//! Configuration constants for the DashScope CosyVoice TTS API.
//!
//! # Preset Voices
//!
//! See the DashScope CosyVoice reference for the full list; commonly used:
//!
//! - `longxiaochun` - gentle female
//! - `longxiaoxia` - sweet female
//! - `longlaotie` - northeastern male
//! - `longshu` - mature male
//! - `longwan` - refined female
//! - `longyue` - lively female
//! - `longfei` - professional male (default)
//! - `longjielidou` - energetic male

/// Environment variable holding the DashScope API key.
pub const DASHSCOPE_API_KEY: &str = "DASHSCOPE_API_KEY";

/// Environment variable overriding the synthesis voice (optional).
pub const QWEN_VOICE: &str = "QWEN_VOICE";

/// Voice used when `QWEN_VOICE` is unset.
pub const DEFAULT_VOICE: &str = "longfei";

/// Fixed synthesis model.
pub const DASHSCOPE_MODEL: &str = "cosyvoice-v2";
