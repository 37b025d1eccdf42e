//! TUI Raymarch (workspace facade crate).
//!
//! Exposes `tui_raymarch::{core,input,term,types}` as one API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_raymarch_core as core;
pub use tui_raymarch_input as input;
pub use tui_raymarch_term as term;
pub use tui_raymarch_types as types;
