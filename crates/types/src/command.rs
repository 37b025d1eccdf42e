//! Per-frame movement intent, discrete commands and scene preset names.

use serde::{Deserialize, Serialize};

/// Movement and look intent for one frame.
///
/// `forward`, `right` and `up` are in `[-1, 1]`; `yaw` and `pitch` are look
/// rates that the camera scales by sensitivity and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub sprint: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0
            && self.right == 0.0
            && self.up == 0.0
            && self.yaw == 0.0
            && self.pitch == 0.0
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenePreset {
    #[default]
    Default,
    Rings,
    Zen,
    Corridor,
    Playground,
    Showcase,
}

impl ScenePreset {
    pub const ALL: [ScenePreset; 6] = [
        ScenePreset::Default,
        ScenePreset::Rings,
        ScenePreset::Zen,
        ScenePreset::Corridor,
        ScenePreset::Playground,
        ScenePreset::Showcase,
    ];

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Some(ScenePreset::Default),
            "rings" => Some(ScenePreset::Rings),
            "zen" => Some(ScenePreset::Zen),
            "corridor" => Some(ScenePreset::Corridor),
            "playground" => Some(ScenePreset::Playground),
            "showcase" => Some(ScenePreset::Showcase),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Default => "default",
            ScenePreset::Rings => "rings",
            ScenePreset::Zen => "zen",
            ScenePreset::Corridor => "corridor",
            ScenePreset::Playground => "playground",
            ScenePreset::Showcase => "showcase",
        }
    }
}

/// Discrete, edge-triggered commands applied between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    TogglePause,
    CycleTheme,
    ToggleHalfBlocks,
    ToggleFog,
    ToggleGamma,
    ToggleDebugInfo,
    /// Reload the current scene, rewind its clock and reset the camera.
    Reset,
    SetMoveSpeed(f32),
    SetTargetFps(u32),
    LoadScene(ScenePreset),
}
