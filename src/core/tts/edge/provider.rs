//! Edge TTS engine implementation.
//!
//! Runs `edge-tts --voice V --text T --write-media PATH` and checks that the
//! tool actually produced audio. The tool is optional in the runtime
//! environment; a missing binary is reported with an actionable install hint
//! rather than a bare spawn error.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::config::{DEFAULT_VOICE, EDGE_TTS_COMMAND, EDGE_VOICE, INSTALL_HINT};
use crate::config::ConfigSource;
use crate::core::tts::base::{TtsEngine, TtsError, TtsResult};

/// Local `edge-tts` engine.
#[derive(Debug)]
pub struct EdgeTts {
    source: Arc<dyn ConfigSource>,
    command: String,
}

impl EdgeTts {
    /// Create an engine reading the voice override from `source`.
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            command: EDGE_TTS_COMMAND.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_command(mut self, command: &str) -> Self {
        self.command = command.to_string();
        self
    }
}

#[async_trait]
impl TtsEngine for EdgeTts {
    fn name(&self) -> &'static str {
        "edge"
    }

    /// No credentials needed; always eligible as a fallback.
    fn check_config(&self) -> Option<String> {
        None
    }

    async fn generate(&self, text: &str, output_path: &Path) -> TtsResult<()> {
        let voice = self
            .source
            .get(EDGE_VOICE)
            .unwrap_or_else(|| DEFAULT_VOICE.to_string());
        debug!("Running {} with voice {voice}", self.command);

        let output = Command::new(&self.command)
            .arg("--voice")
            .arg(&voice)
            .arg("--text")
            .arg(text)
            .arg("--write-media")
            .arg(output_path)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TtsError::ProviderError(INSTALL_HINT.to_string()),
                _ => TtsError::IoError(format!("failed to run {}: {e}", self.command)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TtsError::ProviderError(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        // edge-tts can exit 0 without writing anything for some inputs
        match tokio::fs::metadata(output_path).await {
            Ok(meta) if meta.len() > 0 => Ok(()),
            _ => Err(TtsError::ProviderError(format!(
                "{} produced no audio output",
                self.command
            ))),
        }
    }
}
