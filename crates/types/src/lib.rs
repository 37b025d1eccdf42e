//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the renderer: tuning
//! constants, runtime [`Settings`], the per-frame [`MoveIntent`], themes,
//! scene preset names and the structured color model.
//!
//! Nothing here performs I/O except [`Settings::load`], which reads a JSON file.
//!
//! # Raymarch Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HIT_EPSILON` | 0.001 | Distance below which a march step counts as a hit |
//! | `NORMAL_EPSILON` | 0.001 | Offset used by forward-difference normals |
//! | `SENTINEL_DISTANCE` | 1e6 | Distance reported for empty scenes and invalid indices |
//! | `AMBIENT_LIGHT` | 0.25 | Minimum lighting applied to every hit |
//! | `GAMMA` | 0.8 | Exponent denominator for gamma color mapping |
//!
//! # Examples
//!
//! ```
//! use tui_raymarch_types::{ScenePreset, Theme};
//!
//! let theme = Theme::from_str("amber").unwrap();
//! assert_eq!(theme.next(), Theme::Dark);
//!
//! let preset = ScenePreset::from_str("corridor").unwrap();
//! assert_eq!(preset.as_str(), "corridor");
//! ```

pub mod color;
pub mod command;
pub mod settings;
pub mod theme;

pub use color::{Color, ColorToken, NamedColor, Rgb};
pub use command::{Command, MoveIntent, ScenePreset};
pub use settings::{ConfigError, Settings};
pub use theme::Theme;

/// A march step closer than this to the nearest surface is a hit.
pub const HIT_EPSILON: f32 = 0.001;

/// Axis offset used by forward-difference normal estimation.
pub const NORMAL_EPSILON: f32 = 0.001;

/// Distance returned for empty scenes and out-of-range object indices.
pub const SENTINEL_DISTANCE: f32 = 1e6;

/// Ambient light intensity; diffuse fills the remaining `1 - AMBIENT_LIGHT`.
pub const AMBIENT_LIGHT: f32 = 0.25;

/// Gamma used by gamma color mapping (channels are raised to `1 / GAMMA`).
pub const GAMMA: f32 = 0.8;

/// Material color reported for an invalid object index (neutral gray).
pub const SENTINEL_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Glyph used for one-sample cells.
pub const FULL_BLOCK: char = '█';

/// Glyph used for two-sample cells (top = foreground, bottom = background).
pub const UPPER_HALF_BLOCK: char = '▀';

/// Look-rate multiplier applied to arrow-key look input.
pub const ARROW_LOOK_SCALE: f32 = 0.55;

/// Pitch is clamped to `±PITCH_LIMIT` radians to keep the camera basis stable.
pub const PITCH_LIMIT: f32 = std::f32::consts::PI * 0.49;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raymarch_constants_match_reference_defaults() {
        assert_eq!(HIT_EPSILON, 0.001);
        assert_eq!(NORMAL_EPSILON, 0.001);
        assert_eq!(SENTINEL_DISTANCE, 1e6);
        assert_eq!(AMBIENT_LIGHT, 0.25);
        assert_eq!(GAMMA, 0.8);
        assert_eq!(SENTINEL_COLOR, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn block_glyphs() {
        assert_eq!(FULL_BLOCK as u32, 0x2588);
        assert_eq!(UPPER_HALF_BLOCK as u32, 0x2580);
    }
}
