//! MiniMax TTS provider module.
//!
//! Speech synthesis through the MiniMax `t2a_v2` API using the fixed
//! `speech-02-hd` model and a cloned voice.
//!
//! # Required Configuration
//!
//! - `MINIMAX_API_KEY` - API key
//! - `MINIMAX_VOICE_ID` - cloned voice identifier
//!
//! The response carries the rendered clip as a hex-encoded MP3 payload.

mod config;
mod messages;
mod provider;

pub use config::{MINIMAX_API_KEY, MINIMAX_MODEL, MINIMAX_VOICE_ID};
pub use provider::{MINIMAX_TTS_URL, MINIMAX_TTS_URL_CN, MinimaxTts};
