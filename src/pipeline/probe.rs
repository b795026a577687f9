//! Audio duration probing.

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

/// Measure a clip's duration in seconds with ffprobe.
///
/// Treated as a black box by the pipeline: any failure (missing ffprobe,
/// unreadable file, unparsable output) yields 0.0 rather than an error.
pub async fn audio_duration_secs(path: &Path) -> f64 {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
            .trim()
            .parse()
            .unwrap_or(0.0),
        Ok(out) => {
            debug!("ffprobe exited with {} for {}", out.status, path.display());
            0.0
        }
        Err(err) => {
            debug!("ffprobe unavailable: {err}");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn probe_failure_yields_zero() {
        // Missing file: fails whether or not ffprobe is installed
        let duration = audio_duration_secs(&PathBuf::from("/nonexistent/clip.mp3")).await;
        assert_eq!(duration, 0.0);
    }

    #[tokio::test]
    async fn unparsable_audio_yields_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-audio.mp3");
        std::fs::write(&path, b"definitely not an mp3").unwrap();
        let duration = audio_duration_secs(&path).await;
        assert_eq!(duration, 0.0);
    }
}
