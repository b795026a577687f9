//! Timing module emitter.
//!
//! Serializes a run's results into the `audioConfig.ts` module consumed by
//! the video renderer. Rendering is a pure function of the result set and the
//! provider name. The cumulative start offsets and the grand total are
//! emitted as formulas over the per-scene data, so the renderer needs nothing
//! beyond the module itself; [`scene_start`] and [`total_frames`] replicate
//! those formulas on the Rust side.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::FPS;
use crate::scenes::GeneratedScene;

/// Extra frames appended after the last scene for outro breathing room.
pub const TAIL_BUFFER_FRAMES: u32 = 60;

/// First frame of the scene at `index`, per the emitted `getSceneStart`.
pub fn scene_start(scenes: &[GeneratedScene], index: usize) -> u32 {
    scenes[..index].iter().map(|s| s.frames).sum()
}

/// Total timeline length, per the emitted `TOTAL_FRAMES`.
pub fn total_frames(scenes: &[GeneratedScene]) -> u32 {
    scenes.iter().map(|s| s.frames).sum::<u32>() + TAIL_BUFFER_FRAMES
}

/// Escape text for embedding in a TypeScript template literal.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn escape_double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the TypeScript timing module.
pub fn render_scene_config(scenes: &[GeneratedScene], provider: &str) -> String {
    let entries = scenes
        .iter()
        .map(|s| {
            format!(
                "  {{\n    id: \"{}\",\n    title: \"{}\",\n    text: `{}`,\n    \
                 durationInFrames: {},\n    audioFile: \"{}\",\n  }}",
                s.scene.id,
                escape_double_quoted(&s.scene.title),
                escape_template_literal(&s.scene.text),
                s.frames,
                s.file,
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"// Scene timing configuration (auto-generated, do not edit)
// TTS provider: {provider}

export interface SceneConfig {{
  id: string;
  title: string;
  text: string;
  durationInFrames: number;
  audioFile: string;
}}

export const SCENES: SceneConfig[] = [
{entries}
];

export function getSceneStart(index: number): number {{
  return SCENES.slice(0, index).reduce((sum, s) => sum + s.durationInFrames, 0);
}}

export const TOTAL_FRAMES = SCENES.reduce((sum, s) => sum + s.durationInFrames, 0) + {TAIL_BUFFER_FRAMES};

export const FPS = {FPS};
"#
    )
}

/// Write the rendered module to `path`, creating parent directories and
/// overwriting any previous content.
pub fn write_scene_config(
    path: &Path,
    scenes: &[GeneratedScene],
    provider: &str,
) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_scene_config(scenes, provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::Scene;

    fn generated(id: &str, title: &str, text: &str, frames: u32) -> GeneratedScene {
        GeneratedScene {
            scene: Scene::new(id, title, text),
            file: format!("{id}.mp3"),
            duration: f64::from(frames) / f64::from(FPS),
            frames,
        }
    }

    fn sample_run() -> Vec<GeneratedScene> {
        vec![
            generated("01-intro", "Opening", "hello there", 300),
            generated("02-main", "Main part", "the middle", 450),
            generated("03-outro", "Closing", "goodbye", 600),
        ]
    }

    /// Reverses [`escape_template_literal`].
    fn unescape_template_literal(text: &str) -> String {
        text.replace("\\${", "${")
            .replace("\\`", "`")
            .replace("\\\\", "\\")
    }

    #[test]
    fn scene_start_is_the_cumulative_frame_sum() {
        let scenes = sample_run();
        assert_eq!(scene_start(&scenes, 0), 0);
        assert_eq!(scene_start(&scenes, 1), 300);
        assert_eq!(scene_start(&scenes, 2), 750);
    }

    #[test]
    fn total_frames_adds_the_tail_buffer() {
        let scenes = sample_run();
        assert_eq!(total_frames(&scenes), 300 + 450 + 600 + 60);
    }

    #[test]
    fn rendered_module_preserves_order_and_derivations() {
        let scenes = sample_run();
        let module = render_scene_config(&scenes, "minimax");

        assert!(module.contains("// TTS provider: minimax"));
        assert!(module.contains("durationInFrames: 300"));
        assert!(module.contains("durationInFrames: 450"));
        assert!(module.contains("durationInFrames: 600"));
        assert!(module.contains("audioFile: \"02-main.mp3\""));
        // entries appear in processing order
        let intro = module.find("01-intro").unwrap();
        let main = module.find("02-main").unwrap();
        let outro = module.find("03-outro").unwrap();
        assert!(intro < main && main < outro);
        // the derivations ship with the data
        assert!(module.contains("export function getSceneStart"));
        assert!(module.contains(
            "export const TOTAL_FRAMES = SCENES.reduce((sum, s) => sum + s.durationInFrames, 0) + 60"
        ));
        assert!(module.contains("export const FPS = 30"));
    }

    #[test]
    fn scene_text_with_delimiters_survives_a_round_trip() {
        let text = "a `quoted` piece with ${interpolation} and a \\ backslash";
        let escaped = escape_template_literal(text);
        assert!(!escaped.contains('`') || escaped.contains("\\`"));
        assert_eq!(unescape_template_literal(&escaped), text);
    }

    #[test]
    fn rendered_module_escapes_scene_text() {
        let scenes = vec![generated("01-x", "T", "tick `tock` ${boom}", 30)];
        let module = render_scene_config(&scenes, "edge");
        assert!(module.contains("tick \\`tock\\` \\${boom}"));
    }

    #[test]
    fn write_creates_parent_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("audioConfig.ts");

        write_scene_config(&path, &sample_run(), "edge").unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("02-main"));

        write_scene_config(&path, &sample_run()[..1], "edge").unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(!second.contains("02-main"));
    }
}
