//! Scene generation pipeline.
//!
//! Scenes are processed strictly sequentially, in input order. Each provider
//! call is wrapped in the linear-backoff retry executor; a scene whose retry
//! budget is exhausted is recorded as a failure and the run moves on to the
//! next scene. The timing module is regenerated whenever at least one scene
//! succeeded, so partial runs still refresh the renderer's view of the clips
//! that do exist.

mod probe;

pub use probe::audio_duration_secs;

use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::{AUDIO_DIR, CONFIG_FILE, DEFAULT_MAX_ATTEMPTS, FPS, RETRY_BASE_DELAY_MS};
use crate::core::retry::retry_with_backoff;
use crate::core::tts::{TtsEngine, TtsError, TtsResult};
use crate::emitter;
use crate::scenes::{GeneratedScene, Scene};

/// Pipeline tuning and output locations.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum generation attempts per scene.
    pub max_attempts: u32,
    /// Directory audio clips are written to.
    pub audio_dir: PathBuf,
    /// Path of the regenerated timing module.
    pub config_file: PathBuf,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            audio_dir: PathBuf::from(AUDIO_DIR),
            config_file: PathBuf::from(CONFIG_FILE),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Successfully generated scenes, in processing order.
    pub generated: Vec<GeneratedScene>,
    /// Number of scenes whose retry budget was exhausted.
    pub failed: usize,
}

impl RunReport {
    /// A run succeeds only when every scene rendered.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Render every scene through `engine` and regenerate the timing module.
///
/// Returns the report even when scenes failed; only filesystem errors on the
/// output directory or the timing module abort the run.
pub async fn run(
    engine: &dyn TtsEngine,
    scenes: &[Scene],
    options: &PipelineOptions,
) -> TtsResult<RunReport> {
    tokio::fs::create_dir_all(&options.audio_dir)
        .await
        .map_err(|e| {
            TtsError::IoError(format!(
                "failed to create {}: {e}",
                options.audio_dir.display()
            ))
        })?;

    info!(
        "Generating {} scene(s) with {} (max {} attempts each)",
        scenes.len(),
        engine.name(),
        options.max_attempts
    );

    let mut report = RunReport::default();

    for (index, scene) in scenes.iter().enumerate() {
        let file = format!("{}.mp3", scene.id);
        let output_path = options.audio_dir.join(&file);
        info!("[{}/{}] {}: generating", index + 1, scenes.len(), scene.id);

        let result = retry_with_backoff(
            || engine.generate(&scene.text, &output_path),
            options.max_attempts,
            Duration::from_millis(RETRY_BASE_DELAY_MS),
            |attempt, err: &TtsError| warn!("[{}] attempt {attempt} failed: {err}", scene.id),
        )
        .await;

        match result {
            Ok(()) => {
                let duration = audio_duration_secs(&output_path).await;
                let frames = (duration * f64::from(FPS)).round() as u32;
                info!("[{}] done: {duration:.2}s ({frames} frames)", scene.id);
                report.generated.push(GeneratedScene {
                    scene: scene.clone(),
                    file,
                    duration,
                    frames,
                });
            }
            Err(err) => {
                error!("[{}] giving up: {err}", scene.id);
                report.failed += 1;
            }
        }
    }

    info!(
        "Generated {} scene(s), {} failed",
        report.generated.len(),
        report.failed
    );

    if !report.generated.is_empty() {
        emitter::write_scene_config(&options.config_file, &report.generated, engine.name())
            .map_err(|e| {
                TtsError::IoError(format!(
                    "failed to write {}: {e}",
                    options.config_file.display()
                ))
            })?;
        info!("Updated {}", options.config_file.display());
    }

    Ok(report)
}
