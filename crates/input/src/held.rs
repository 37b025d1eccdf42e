//! Held-key tracking for continuous movement.
//!
//! Many terminals never report key releases, only the press and its
//! auto-repeats. Every press refreshes a timestamp and a key that has not
//! been refreshed within the release timeout counts as released.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::types::{MoveIntent, ARROW_LOOK_SCALE};

const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// A continuous control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Forward,
    Back,
    Right,
    Left,
    Up,
    Down,
    LookLeft,
    LookRight,
    LookUp,
    LookDown,
    Sprint,
}

impl HeldKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(HeldKey::Forward),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(HeldKey::Back),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(HeldKey::Right),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(HeldKey::Left),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(HeldKey::Up),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(HeldKey::Down),
            KeyCode::Left => Some(HeldKey::LookLeft),
            KeyCode::Right => Some(HeldKey::LookRight),
            KeyCode::Up => Some(HeldKey::LookUp),
            KeyCode::Down => Some(HeldKey::LookDown),
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                Some(HeldKey::Sprint)
            }
            _ => None,
        }
    }
}

/// Tracks which continuous controls are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: ArrayVec<(HeldKey, Instant), 16>,
    key_release_timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Feed a key event. Returns `true` if it was a movement/look key.
    pub fn handle_event(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(held) = HeldKey::from_key_code(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.press(held, now);
                // Uppercase letters arrive with Shift held.
                if key.modifiers.contains(KeyModifiers::SHIFT)
                    || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase())
                {
                    self.press(HeldKey::Sprint, now);
                }
            }
            KeyEventKind::Release => self.release(held),
        }
        true
    }

    pub fn press(&mut self, key: HeldKey, now: Instant) {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = now;
        } else {
            let _ = self.held.try_push((key, now));
        }
    }

    pub fn release(&mut self, key: HeldKey) {
        self.held.retain(|(k, _)| *k != key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: HeldKey) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Drops expired keys and folds the rest into a movement intent.
    pub fn intent(&mut self, now: Instant) -> MoveIntent {
        let timeout = self.key_release_timeout;
        self.held
            .retain(|(_, at)| now.saturating_duration_since(*at) <= timeout);

        let axis = |pos: HeldKey, neg: HeldKey| -> f32 {
            (self.is_held(pos) as i8 - self.is_held(neg) as i8) as f32
        };

        MoveIntent {
            forward: axis(HeldKey::Forward, HeldKey::Back),
            right: axis(HeldKey::Right, HeldKey::Left),
            up: axis(HeldKey::Up, HeldKey::Down),
            yaw: axis(HeldKey::LookLeft, HeldKey::LookRight) * ARROW_LOOK_SCALE,
            pitch: axis(HeldKey::LookUp, HeldKey::LookDown) * ARROW_LOOK_SCALE,
            sprint: self.is_held(HeldKey::Sprint),
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
