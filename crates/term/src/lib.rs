//! Terminal presentation for the raymarcher.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! the [`Renderer`] fills it row-parallel, the HUD is drawn on top, and the
//! [`FrameDiffer`] turns it into escape-coded updates for only the rows that
//! changed since the previous frame.
//!
//! Pipeline per frame:
//!
//! | Step | Type | Notes |
//! |------|------|-------|
//! | trace | [`Renderer`] | one or two samples per cell, rows on rayon workers |
//! | overlay | [`draw_hud`] | legend, metrics, toggles |
//! | diff | [`FrameDiffer`] | FNV-1a row hashes, dirty rows only |
//! | write | [`TerminalSession`] | one buffered write per frame |

pub mod diff;
pub mod fb;
pub mod hud;
pub mod pacing;
pub mod render;
pub mod terminal;
pub mod viewer;

pub use tui_raymarch_core as core;
pub use tui_raymarch_types as types;

pub use diff::{hash_row, DiffSummary, FrameDiffer};
pub use fb::{Cell, FrameBuffer};
pub use hud::{draw_hud, HudInfo};
pub use pacing::FramePacer;
pub use render::{RenderStats, Renderer};
pub use terminal::TerminalSession;
pub use viewer::Viewer;
