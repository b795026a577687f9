//! TTS engine registry and selection.
//!
//! Closed set of speech-synthesis backends behind the [`TtsEngine`] trait:
//!
//! - `"minimax"` - MiniMax `speech-02-hd` (primary; needs API key + voice id)
//! - `"dashscope"` - DashScope CosyVoice (needs API key; aliases: `qwen`,
//!   `cosyvoice`)
//! - `"edge"` - local `edge-tts` tool (no credentials; alias: `edge-tts`)
//!
//! Selection either honors an explicit provider name, failing fast when the
//! name is unknown or its configuration is incomplete, or probes the priority
//! order above and settles on the first configured backend, with edge as the
//! terminal fallback.

pub mod base;
pub mod dashscope;
pub mod edge;
pub mod minimax;

use std::sync::Arc;

pub use base::{TtsEngine, TtsError, TtsResult};
pub use dashscope::{DASHSCOPE_TTS_URL, DashscopeTts};
pub use edge::EdgeTts;
pub use minimax::{MINIMAX_TTS_URL, MinimaxTts};

use crate::config::ConfigSource;

/// Probe order for automatic provider selection.
pub const PROVIDER_PRIORITY: &[&str] = &["minimax", "dashscope", "edge"];

/// Factory function to create a TTS engine by name.
///
/// # Supported Providers
///
/// - `"minimax"` - MiniMax t2a_v2 API
/// - `"dashscope"` or `"qwen"` or `"cosyvoice"` - DashScope CosyVoice API
/// - `"edge"` or `"edge-tts"` - local edge-tts tool
pub fn create_engine(
    name: &str,
    source: Arc<dyn ConfigSource>,
) -> TtsResult<Box<dyn TtsEngine>> {
    match name.to_lowercase().as_str() {
        "minimax" => Ok(Box::new(MinimaxTts::new(source))),
        "dashscope" | "qwen" | "cosyvoice" => Ok(Box::new(DashscopeTts::new(source))),
        "edge" | "edge-tts" | "edge_tts" => Ok(Box::new(EdgeTts::new(source))),
        _ => Err(TtsError::UnknownProvider(format!(
            "{name}. Supported providers: minimax, dashscope, edge"
        ))),
    }
}

/// Pick the engine for a run.
///
/// An explicit name is looked up and validated before any generation: an
/// unknown name or a failing `check_config` is an immediate error, never a
/// silent fallback. Without an explicit name, providers are probed in
/// [`PROVIDER_PRIORITY`] order and the first fully configured one wins.
pub fn select_engine(
    explicit: Option<&str>,
    source: Arc<dyn ConfigSource>,
) -> TtsResult<Box<dyn TtsEngine>> {
    if let Some(name) = explicit {
        let engine = create_engine(name, source)?;
        if let Some(missing) = engine.check_config() {
            return Err(TtsError::ConfigurationError(missing));
        }
        return Ok(engine);
    }

    for name in PROVIDER_PRIORITY {
        let engine = create_engine(name, source.clone())?;
        if engine.check_config().is_none() {
            return Ok(engine);
        }
    }

    // edge never fails check_config, so this is unreachable in practice
    create_engine("edge", source)
}
