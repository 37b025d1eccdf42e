//! Console themes.

use serde::{Deserialize, Serialize};

use crate::color::{Color, NamedColor};

/// UI theme. Affects the miss/background color and HUD accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Cyan,
    Green,
    Amber,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Dark,
        Theme::Light,
        Theme::Cyan,
        Theme::Green,
        Theme::Amber,
    ];

    /// The next theme in cycling order, wrapping back to `Dark`.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Color of rays that hit nothing.
    pub fn background(self) -> Color {
        match self {
            Theme::Light => Color::Named(NamedColor::White),
            _ => Color::Named(NamedColor::Black),
        }
    }

    pub fn primary(self) -> Color {
        Color::Named(match self {
            Theme::Dark => NamedColor::Cyan,
            Theme::Light => NamedColor::Blue,
            Theme::Cyan => NamedColor::BrightCyan,
            Theme::Green => NamedColor::BrightGreen,
            Theme::Amber => NamedColor::Yellow,
        })
    }

    pub fn secondary(self) -> Color {
        Color::Named(match self {
            Theme::Dark => NamedColor::BrightBlack,
            Theme::Light => NamedColor::White,
            Theme::Cyan => NamedColor::Cyan,
            Theme::Green => NamedColor::Green,
            Theme::Amber => NamedColor::BrightYellow,
        })
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "cyan" => Some(Theme::Cyan),
            "green" => Some(Theme::Green),
            "amber" => Some(Theme::Amber),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Cyan => "cyan",
            Theme::Green => "green",
            Theme::Amber => "amber",
        }
    }
}
