//! Runtime configuration.
//!
//! Settings are read from an optional JSON file (camelCase keys). Missing keys
//! fall back to the defaults below, so a partial file is valid.
//!
//! ```
//! use tui_raymarch_types::Settings;
//!
//! let s = Settings::from_json_str(r#"{ "enableFog": true, "fogDensity": 0.05 }"#).unwrap();
//! assert!(s.enable_fog);
//! assert_eq!(s.max_raymarch_steps, 80);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub target_fps: u32,
    pub use_half_blocks: bool,
    pub max_raymarch_steps: u32,
    pub max_render_distance: f32,
    pub mouse_sensitivity: f32,
    pub move_speed: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub show_debug_info: bool,
    pub enable_fog: bool,
    pub fog_density: f32,
    pub map_colors_with_gamma: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            use_half_blocks: true,
            max_raymarch_steps: 80,
            max_render_distance: 100.0,
            mouse_sensitivity: 2.5,
            move_speed: 3.0,
            field_of_view: 60.0,
            show_debug_info: true,
            enable_fog: false,
            fog_density: 0.02,
            map_colors_with_gamma: true,
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(invalid("targetFps", "must be at least 1"));
        }
        if self.max_raymarch_steps == 0 {
            return Err(invalid("maxRaymarchSteps", "must be at least 1"));
        }
        if !(self.max_render_distance > 0.0) {
            return Err(invalid("maxRenderDistance", "must be positive"));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(invalid("fieldOfView", "must be within (0, 180) degrees"));
        }
        if !(self.fog_density >= 0.0) {
            return Err(invalid("fogDensity", "must not be negative"));
        }
        if !self.move_speed.is_finite() {
            return Err(invalid("moveSpeed", "must be finite"));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(invalid("mouseSensitivity", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json_str(r#"{ "useHalfBlocks": false }"#).unwrap();
        assert!(!s.use_half_blocks);
        assert_eq!(s.max_render_distance, 100.0);
        assert_eq!(s.field_of_view, 60.0);
    }

    #[test]
    fn empty_object_is_default() {
        let s = Settings::from_json_str("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn rejects_zero_steps() {
        let err = Settings::from_json_str(r#"{ "maxRaymarchSteps": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "maxRaymarchSteps",
                ..
            }
        ));
    }

    #[test]
    fn rejects_out_of_range_fov() {
        assert!(Settings::from_json_str(r#"{ "fieldOfView": 180 }"#).is_err());
        assert!(Settings::from_json_str(r#"{ "fieldOfView": -5 }"#).is_err());
    }

    #[test]
    fn non_finite_speeds_name_their_field() {
        let s = Settings {
            mouse_sensitivity: f32::NAN,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::Invalid {
                field: "mouseSensitivity",
                ..
            })
        ));

        let s = Settings {
            move_speed: f32::INFINITY,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::Invalid {
                field: "moveSpeed",
                ..
            })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Settings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "tui-raymarch-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "targetFps": 30, "enableFog": true }"#).unwrap();
        let s = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(s.target_fps, 30);
        assert!(s.enable_fog);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
