//! Configuration module for voxgen.
//!
//! Provider credentials and voice identifiers come from environment variables;
//! a `.env` file is honored at startup. Lookups go through the [`ConfigSource`]
//! capability handed to each engine at construction time, so tests can swap in
//! a map-backed source instead of mutating process state.

use std::collections::HashMap;

// =============================================================================
// Constants
// =============================================================================

/// Frame rate converting seconds of audio to integer video frames.
pub const FPS: u32 = 30;

/// Default maximum generation attempts per scene.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay between retry attempts (milliseconds). The actual wait grows
/// linearly with the attempt number.
pub const RETRY_BASE_DELAY_MS: u64 = 1000;

/// Directory audio clips are written to, relative to the project root.
pub const AUDIO_DIR: &str = "public/audio";

/// Path of the regenerated timing module, relative to the project root.
pub const CONFIG_FILE: &str = "src/audioConfig.ts";

// =============================================================================
// Configuration Sources
// =============================================================================

/// Read-only source of named configuration values.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    /// Look up a configuration value. Empty values count as unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// Environment-variable backed [`ConfigSource`] used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Map-backed [`ConfigSource`] for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapSource(HashMap<String, String>);

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_source_returns_inserted_values() {
        let source = MapSource::new().with("KEY", "value");
        assert_eq!(source.get("KEY"), Some("value".to_string()));
        assert_eq!(source.get("OTHER"), None);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let source = MapSource::new().with("KEY", "");
        assert_eq!(source.get("KEY"), None);
    }
}
