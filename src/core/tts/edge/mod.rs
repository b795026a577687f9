//! Edge TTS fallback provider module.
//!
//! Synthesis through the local `edge-tts` command-line tool. No credentials
//! are required, which makes this the terminal fallback of the provider
//! registry; when the tool is not installed, generation fails with the
//! installation instruction.
//!
//! # Configuration
//!
//! - `EDGE_VOICE` - voice identifier (optional, default `zh-CN-YunyangNeural`)

mod config;
mod provider;

pub use config::{DEFAULT_VOICE, EDGE_TTS_COMMAND, EDGE_VOICE};
pub use provider::EdgeTts;
