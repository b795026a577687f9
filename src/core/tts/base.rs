//! Shared TTS engine abstraction.
//!
//! Every backend implements [`TtsEngine`]: a synchronous configuration check
//! that names the first missing requirement, and an asynchronous `generate`
//! call that synthesizes one clip and writes it to disk. Engines are stateless
//! with respect to scenes; credentials and voice identifiers are resolved from
//! the injected [`ConfigSource`](crate::config::ConfigSource) at call time.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for TTS operations.
pub type TtsResult<T> = Result<T, TtsError>;

/// Error type for TTS engine selection and generation.
#[derive(Error, Debug, Clone)]
pub enum TtsError {
    /// A required configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The requested provider name is not in the registry.
    #[error("Unknown TTS provider: {0}")]
    UnknownProvider(String),

    /// The HTTP request itself failed (connect, transport, timeout).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The provider answered but did not return usable audio.
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The audio payload could not be decoded.
    #[error("Audio decode error: {0}")]
    DecodeError(String),

    /// Writing the synthesized clip to disk failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// A pluggable text-to-speech backend.
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Registry name of this engine.
    fn name(&self) -> &'static str;

    /// Check whether the engine is ready to generate.
    ///
    /// Side-effect free. Required configuration values are checked in a fixed
    /// order and the first missing one is returned as a human-readable
    /// message; `None` means the engine is fully configured.
    fn check_config(&self) -> Option<String>;

    /// Synthesize `text` and write the resulting audio bytes to `output_path`.
    async fn generate(&self, text: &str, output_path: &Path) -> TtsResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_the_message() {
        let err = TtsError::ProviderError("no audio in response".to_string());
        assert_eq!(err.to_string(), "Provider error: no audio in response");

        let err = TtsError::UnknownProvider("polly".to_string());
        assert_eq!(err.to_string(), "Unknown TTS provider: polly");
    }
}
