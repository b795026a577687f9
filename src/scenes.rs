//! Scene definitions.
//!
//! A scene is one unit of narration text mapped to one audio clip and one
//! segment of video runtime. The list for a run is fixed at process start and
//! never mutated while the pipeline is running.

use serde::{Deserialize, Serialize};

/// One unit of narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique, filesystem-safe identifier; used verbatim as the clip stem.
    pub id: String,
    /// Display title of the rendered segment.
    pub title: String,
    /// Source text to synthesize.
    pub text: String,
}

impl Scene {
    pub fn new(id: &str, title: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }
    }
}

/// A scene that was successfully rendered to audio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedScene {
    /// The source scene.
    pub scene: Scene,
    /// Clip filename relative to the audio output directory.
    pub file: String,
    /// Clip length in seconds; 0.0 when probing failed.
    pub duration: f64,
    /// Clip length in video frames at the project frame rate.
    pub frames: u32,
}

/// Built-in scene list rendered by a run.
pub fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            "01-intro",
            "Opening",
            "Welcome to this video. Today we are taking a close look at how the whole \
             system fits together.",
        ),
        Scene::new(
            "02-main",
            "Main part",
            "Let's walk through the core ideas step by step, starting from the simplest \
             possible setup.",
        ),
        Scene::new(
            "03-outro",
            "Closing",
            "That's all for this episode. Thanks for watching, and see you next time!",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn built_in_scene_ids_are_unique_and_filesystem_safe() {
        let scenes = scenes();
        let ids: HashSet<_> = scenes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), scenes.len());
        for id in ids {
            assert!(
                id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "scene id {id:?} is not filesystem-safe"
            );
        }
    }
}
