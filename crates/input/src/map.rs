//! Key mapping from terminal events to discrete commands.
//!
//! Movement and look keys are not commands; they are tracked by
//! [`crate::HeldKeys`] so they can act continuously while held.

use crate::types::{Command, ScenePreset};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Move speeds selected by keys `1`..`4`.
pub const MOVE_SPEEDS: [f32; 4] = [1.0, 3.0, 6.0, 12.0];

/// Frame rates selected by `F1`..`F4`.
pub const TARGET_FPS_PRESETS: [u32; 4] = [30, 60, 120, 144];

/// Map a key press to a command.
pub fn map_command(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::CycleTheme),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::ToggleHalfBlocks),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Command::ToggleFog),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::ToggleGamma),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(Command::ToggleDebugInfo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        // Move speed
        KeyCode::Char(c @ '1'..='4') => {
            Some(Command::SetMoveSpeed(MOVE_SPEEDS[(c as u8 - b'1') as usize]))
        }

        // Frame rate
        KeyCode::F(n @ 1..=4) => Some(Command::SetTargetFps(TARGET_FPS_PRESETS[(n - 1) as usize])),

        // Scenes
        KeyCode::Char('0') => Some(Command::LoadScene(ScenePreset::Default)),
        KeyCode::Char('5') => Some(Command::LoadScene(ScenePreset::Rings)),
        KeyCode::Char('6') => Some(Command::LoadScene(ScenePreset::Zen)),
        KeyCode::Char('7') => Some(Command::LoadScene(ScenePreset::Corridor)),
        KeyCode::Char('8') => Some(Command::LoadScene(ScenePreset::Playground)),
        KeyCode::Char('9') => Some(Command::LoadScene(ScenePreset::Showcase)),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
