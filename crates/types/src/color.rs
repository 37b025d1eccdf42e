//! Structured color values.
//!
//! Colors stay structured until the moment they are written to the terminal.
//! A [`ColorToken`] carries a foreground and an optional background; the role
//! of a color is decided by the slot it occupies, never by escape-code text.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the triple into the low 24 bits.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// The 16 standard ANSI colors, in SGR order (30-37, then 90-97).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Index into the 16-color table (0-15).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A terminal color in any of the encodings a terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Truecolor (`38;2;r;g;b` / `48;2;r;g;b`).
    Rgb(Rgb),
    /// 256-color palette entry (`38;5;n` / `48;5;n`).
    Indexed(u8),
    /// One of the 16 named colors.
    Named(NamedColor),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    /// Stable numeric identity: the encoding tag in the top byte, the payload below.
    #[inline]
    pub const fn key(self) -> u32 {
        match self {
            Color::Rgb(rgb) => (1 << 24) | rgb.packed(),
            Color::Indexed(n) => (2 << 24) | n as u32,
            Color::Named(c) => (3 << 24) | c.index() as u32,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<NamedColor> for Color {
    fn from(c: NamedColor) -> Self {
        Color::Named(c)
    }
}

/// Per-cell color: a foreground and, for packed cells, a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl ColorToken {
    /// Foreground-only token.
    pub const fn foreground(fg: Color) -> Self {
        Self { fg, bg: None }
    }

    /// Packs two independently shaded tokens into one half-block cell.
    ///
    /// The top token's foreground stays the foreground; the bottom token's
    /// foreground moves into the background role.
    pub const fn packed(top: ColorToken, bottom: ColorToken) -> Self {
        Self {
            fg: top.fg,
            bg: Some(bottom.into_background().0),
        }
    }

    /// The same color triple re-tagged for the background role.
    pub const fn into_background(self) -> BackgroundColor {
        BackgroundColor(self.fg)
    }

    /// Identity used by row hashing. Equal tokens always share a key.
    #[inline]
    pub const fn hash_key(self) -> u64 {
        let bg = match self.bg {
            Some(c) => c.key() as u64,
            None => 0,
        };
        ((self.fg.key() as u64) << 32) | bg
    }
}

/// A color that has been moved into the background role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundColor(pub Color);
