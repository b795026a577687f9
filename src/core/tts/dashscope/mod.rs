//! DashScope (Qwen CosyVoice) TTS provider module.
//!
//! Speech synthesis through Alibaba Cloud DashScope's `text2audio` service
//! with the `cosyvoice-v2` model.
//!
//! # Configuration
//!
//! - `DASHSCOPE_API_KEY` - API key (required)
//! - `QWEN_VOICE` - preset voice identifier (optional, default `longfei`)
//!
//! The response carries the rendered clip either inline as base64 at
//! `output.audio`, or out of line as a download URL at `output.audio_url`.

mod config;
mod messages;
mod provider;

pub use config::{DASHSCOPE_API_KEY, DASHSCOPE_MODEL, DEFAULT_VOICE, QWEN_VOICE};
pub use provider::{DASHSCOPE_TTS_URL, DashscopeTts};
