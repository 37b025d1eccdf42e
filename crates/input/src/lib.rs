//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into discrete [`crate::types::Command`]s and tracks held movement
//! keys (including on terminals without key-release events) to produce a
//! per-frame [`crate::types::MoveIntent`].

pub mod held;
pub mod map;

pub use tui_raymarch_types as types;

pub use held::{HeldKey, HeldKeys};
pub use map::{map_command, should_quit, MOVE_SPEEDS, TARGET_FPS_PRESETS};
